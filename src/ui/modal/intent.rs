//! Intents for the product detail modal.

use crate::ui::mvi::Intent;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub enum ModalIntent {
    /// Escape, backdrop click or the close control.
    Dismiss { now: Instant, transition: Duration },

    /// Timer tick; completes a pending close once the deadline passes.
    Tick { now: Instant },

    PrevImage,
    NextImage,

    /// Scroll the description by `delta` rows, staying within `0..=max`.
    Scroll { delta: i32, max: u16 },
}

impl Intent for ModalIntent {}
