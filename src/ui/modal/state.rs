//! State for the product detail modal.

use super::cursor::ImageCursor;
use crate::ui::mvi::UiState;
use std::time::Instant;

/// Lifecycle of one modal mount: Open → Closing → Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    /// Fully visible. Initial phase of every mount.
    #[default]
    Open,

    /// Fading out after a dismissal trigger.
    Closing {
        started: Instant,
        /// Instant at which the modal becomes `Closed`. Never re-armed.
        deadline: Instant,
    },

    /// Transition finished; the owner unmounts the modal.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub cursor: ImageCursor,
    /// First visible row of the description.
    pub description_scroll: u16,
}

impl UiState for ModalState {}

impl ModalState {
    pub fn new(image_count: usize) -> Self {
        Self {
            phase: ModalPhase::Open,
            cursor: ImageCursor::new(image_count),
            description_scroll: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Open)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, ModalPhase::Closing { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, ModalPhase::Closed)
    }

    /// Exit animation progress in `[0.0, 1.0]`.
    pub fn closing_progress(&self, now: Instant) -> f32 {
        match self.phase {
            ModalPhase::Open => 0.0,
            ModalPhase::Closed => 1.0,
            ModalPhase::Closing { started, deadline } => {
                let total = deadline.saturating_duration_since(started);
                if total.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}
