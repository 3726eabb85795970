//! State/intent/reducer traits shared by the modal.
//!
//! ```text
//! key, click or tick ──→ Intent ──→ Reducer ──→ State ──→ dialog
//!          ↑                                               │
//!          └───────────────────────────────────────────────┘
//! ```

/// Everything a view draws.
///
/// `Default` lets the owner move the state out with `std::mem::take`
/// while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or timer event. Intents carry the current time when a
/// transition depends on it, so reducers stay deterministic.
pub trait Intent: Send + 'static {}

/// The only place a state transition happens: `(State, Intent) -> State`
/// with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
