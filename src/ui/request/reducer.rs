//! Reducer for the summarization request lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::RequestIntent;
use super::state::RequestState;

/// State transitions for the request lifecycle.
pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestState;
    type Intent = RequestIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RequestIntent::Submitted => RequestState::Pending { progress_dots: 0 },

            RequestIntent::ProgressTick => match state {
                RequestState::Pending { progress_dots } => RequestState::Pending {
                    progress_dots: (progress_dots + 1) % 4,
                },
                other => other,
            },

            RequestIntent::Completed { result } => match state {
                // Only an in-flight request can complete; a completion
                // arriving in any other state belongs to a superseded
                // request and is dropped.
                RequestState::Pending { .. } => match result {
                    Ok(items) => RequestState::Succeeded { items },
                    Err(message) => RequestState::Failed { message },
                },
                other => other,
            },
        }
    }
}
