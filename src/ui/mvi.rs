//! Model-View-Intent primitives for the UI layer.
//!
//! Every interactive feature (form, request lifecycle, results accordion)
//! is a state type, an intent type, and a pure reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//! ```
//!
//! Side effects (network, timers) live outside the reducers, in the worker.

/// Marker trait for UI state objects.
///
/// States are cloneable values with a meaningful default, comparable so the
/// view can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or system events that a reducer
/// turns into a new state.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
