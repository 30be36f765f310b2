//! Intents for the results accordion.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum AccordionIntent {
    /// A new result set arrived (or a submission started with
    /// `item_count: 0`). Replaces all expansion state; the first panel of a
    /// non-empty set starts expanded.
    Reset { item_count: usize },

    /// Flip one panel. Never affects any other index; multiple panels may
    /// be open at once.
    Toggle { index: usize },
}

impl Intent for AccordionIntent {}
