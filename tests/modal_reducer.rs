//! Tests for the modal MVI state machine and image cursor.

use std::time::{Duration, Instant};
use vanika::ui::modal::{ImageCursor, ModalIntent, ModalPhase, ModalReducer, ModalState};
use vanika::ui::mvi::Reducer;

const TRANSITION: Duration = Duration::from_millis(300);

fn reduce_all(state: ModalState, intents: &[ModalIntent]) -> ModalState {
    intents
        .iter()
        .fold(state, |state, intent| ModalReducer::reduce(state, *intent))
}

// -- Lifecycle -------------------------------------------------------------------

#[test]
fn open_closing_closed() {
    let t0 = Instant::now();
    let state = ModalState::new(1);
    assert!(state.is_open());

    let state = ModalReducer::reduce(
        state,
        ModalIntent::Dismiss {
            now: t0,
            transition: TRANSITION,
        },
    );
    assert_eq!(
        state.phase,
        ModalPhase::Closing {
            started: t0,
            deadline: t0 + TRANSITION
        }
    );

    let state = ModalReducer::reduce(state, ModalIntent::Tick { now: t0 + TRANSITION });
    assert!(state.is_closed());
}

#[test]
fn second_dismiss_keeps_original_deadline() {
    let t0 = Instant::now();
    let state = reduce_all(
        ModalState::new(1),
        &[
            ModalIntent::Dismiss {
                now: t0,
                transition: TRANSITION,
            },
            ModalIntent::Dismiss {
                now: t0 + Duration::from_millis(200),
                transition: TRANSITION,
            },
        ],
    );
    assert_eq!(
        state.phase,
        ModalPhase::Closing {
            started: t0,
            deadline: t0 + TRANSITION
        }
    );
}

#[test]
fn ticks_before_deadline_keep_closing() {
    let t0 = Instant::now();
    let state = reduce_all(
        ModalState::new(1),
        &[
            ModalIntent::Dismiss {
                now: t0,
                transition: TRANSITION,
            },
            ModalIntent::Tick {
                now: t0 + Duration::from_millis(299),
            },
        ],
    );
    assert!(state.is_closing());
}

#[test]
fn tick_while_open_changes_nothing() {
    let state = ModalState::new(2);
    let next = ModalReducer::reduce(state.clone(), ModalIntent::Tick { now: Instant::now() });
    assert_eq!(next, state);
}

#[test]
fn dismiss_after_closed_is_ignored() {
    let t0 = Instant::now();
    let state = reduce_all(
        ModalState::new(1),
        &[
            ModalIntent::Dismiss {
                now: t0,
                transition: TRANSITION,
            },
            ModalIntent::Tick { now: t0 + TRANSITION },
            ModalIntent::Dismiss {
                now: t0 + TRANSITION,
                transition: TRANSITION,
            },
        ],
    );
    assert!(state.is_closed());
}

#[test]
fn closing_progress_runs_zero_to_one() {
    let t0 = Instant::now();
    let state = ModalReducer::reduce(
        ModalState::new(1),
        ModalIntent::Dismiss {
            now: t0,
            transition: TRANSITION,
        },
    );
    assert_eq!(state.closing_progress(t0), 0.0);
    let half = state.closing_progress(t0 + Duration::from_millis(150));
    assert!((half - 0.5).abs() < 0.01);
    assert_eq!(state.closing_progress(t0 + Duration::from_secs(1)), 1.0);
}

// -- Image cursor ----------------------------------------------------------------

#[test]
fn cursor_wraps_in_both_directions() {
    let cursor = ImageCursor::new(3);
    assert_eq!(cursor.prev().index(), 2);
    assert_eq!(cursor.next().next().next().index(), 0);
    assert_eq!(cursor.prev().next().index(), 0);
}

#[test]
fn single_image_navigation_is_a_no_op() {
    let state = reduce_all(
        ModalState::new(1),
        &[ModalIntent::NextImage, ModalIntent::PrevImage, ModalIntent::NextImage],
    );
    assert_eq!(state.cursor.index(), 0);
}

#[test]
fn cursor_frozen_while_closing() {
    let t0 = Instant::now();
    let state = reduce_all(
        ModalState::new(3),
        &[
            ModalIntent::NextImage,
            ModalIntent::Dismiss {
                now: t0,
                transition: TRANSITION,
            },
            ModalIntent::NextImage,
        ],
    );
    assert_eq!(state.cursor.index(), 1);
}

#[test]
fn description_scroll_is_clamped() {
    let state = reduce_all(
        ModalState::new(1),
        &[
            ModalIntent::Scroll { delta: -4, max: 5 },
            ModalIntent::Scroll { delta: 3, max: 5 },
        ],
    );
    assert_eq!(state.description_scroll, 3);

    let state = ModalReducer::reduce(state, ModalIntent::Scroll { delta: 10, max: 5 });
    assert_eq!(state.description_scroll, 5);
}
