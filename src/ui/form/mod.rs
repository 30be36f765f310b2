//! Submission form feature module.
//!
//! Holds the editable request fields (catalogue URL, reference URL, cutoff
//! date, patch note count) and turns them into a validated
//! `SummarizeRequest`. Uses the MVI pattern:
//! - `state.rs` - field values and field identities
//! - `intent.rs` - editing actions
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState};
