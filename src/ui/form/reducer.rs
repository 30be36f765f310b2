//! Reducer for the submission form.

use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, MAX_PATCH_NOTES, MIN_PATCH_NOTES};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Input { field, ch } => {
                if let Some(value) = state.value_mut(field) {
                    if !ch.is_control() {
                        value.push(ch);
                    }
                }
                state
            }

            FormIntent::Paste { field, text } => {
                if let Some(value) = state.value_mut(field) {
                    // Pasted URLs often arrive with a trailing newline.
                    value.push_str(text.trim());
                }
                state
            }

            FormIntent::Backspace { field } => {
                if let Some(value) = state.value_mut(field) {
                    value.pop();
                }
                state
            }

            FormIntent::StepMaxItems { delta } => {
                let stepped = state.max_patch_notes as i16 + delta as i16;
                state.max_patch_notes =
                    stepped.clamp(MIN_PATCH_NOTES as i16, MAX_PATCH_NOTES as i16) as u8;
                state
            }
        }
    }
}
