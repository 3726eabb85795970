//! Reducer for the product detail modal.

use crate::ui::mvi::Reducer;

use super::intent::ModalIntent;
use super::state::{ModalPhase, ModalState};

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::Dismiss { now, transition } => match state.phase {
                ModalPhase::Open => ModalState {
                    phase: ModalPhase::Closing {
                        started: now,
                        deadline: now + transition,
                    },
                    ..state
                },
                // Already on the way out: the pending deadline stands.
                ModalPhase::Closing { .. } | ModalPhase::Closed => state,
            },

            ModalIntent::Tick { now } => match state.phase {
                ModalPhase::Closing { deadline, .. } if now >= deadline => ModalState {
                    phase: ModalPhase::Closed,
                    ..state
                },
                _ => state,
            },

            ModalIntent::PrevImage if state.is_open() => ModalState {
                cursor: state.cursor.prev(),
                ..state
            },

            ModalIntent::NextImage if state.is_open() => ModalState {
                cursor: state.cursor.next(),
                ..state
            },

            ModalIntent::Scroll { delta, max } if state.is_open() => {
                let scrolled = i64::from(state.description_scroll) + i64::from(delta);
                ModalState {
                    description_scroll: scrolled.clamp(0, i64::from(max)) as u16,
                    ..state
                }
            }

            ModalIntent::PrevImage | ModalIntent::NextImage | ModalIntent::Scroll { .. } => state,
        }
    }
}
