//! Request lifecycle feature module.
//!
//! Models one summarization request as a state machine:
//! Idle → Pending → Succeeded/Failed. Uses the MVI pattern:
//! - `state.rs` - lifecycle state enum
//! - `intent.rs` - submission, progress ticks, completion
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::RequestState;
