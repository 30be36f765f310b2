//! Intents for the submission form.

use crate::ui::mvi::Intent;

use super::state::FormField;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Type one character into a text field.
    Input { field: FormField, ch: char },

    /// Insert pasted text into a text field.
    Paste { field: FormField, text: String },

    /// Delete the last character of a text field.
    Backspace { field: FormField },

    /// Step the patch note count, clamped to its valid range.
    StepMaxItems { delta: i8 },
}

impl Intent for FormIntent {}
