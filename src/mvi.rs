//! Unidirectional state flow for list views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                     │
//!    └── fetch outcome ────┘
//! ```

/// Something that happened: a user edit or a finished fetch.
pub trait Intent: Send + 'static {}

/// Snapshot a view renders from. Equal states render identically.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// The only place state transitions happen. `reduce` has no side effects;
/// work it wants done is left in the returned state.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduces `state` where it lives.
    fn reduce_in_place(state: &mut Self::State, intent: Self::Intent) {
        let current = std::mem::take(state);
        *state = Self::reduce(current, intent);
    }
}
