//! Results accordion feature module.
//!
//! Each summary item renders as an independently collapsible panel. Uses
//! the MVI pattern:
//! - `state.rs` - which panels are expanded
//! - `intent.rs` - reset on new results, toggle on demand
//! - `reducer.rs` - state transitions
//! - `title.rs` - display title derivation
//! - `panel.rs` - rendering

mod intent;
mod panel;
mod reducer;
mod state;
mod title;

pub use intent::AccordionIntent;
pub use panel::panel_lines;
pub use reducer::AccordionReducer;
pub use state::AccordionState;
