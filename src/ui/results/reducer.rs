//! Reducer for the results accordion.

use crate::ui::mvi::Reducer;

use super::intent::AccordionIntent;
use super::state::AccordionState;

pub struct AccordionReducer;

impl Reducer for AccordionReducer {
    type State = AccordionState;
    type Intent = AccordionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AccordionIntent::Reset { item_count } => {
                state.clear();
                if item_count > 0 {
                    state.set(0, true);
                }
                state
            }
            AccordionIntent::Toggle { index } => {
                state.flip(index);
                state
            }
        }
    }
}
