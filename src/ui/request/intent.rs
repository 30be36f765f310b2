//! Intents for the summarization request lifecycle.

use crate::api::SummaryItem;
use crate::ui::mvi::Intent;

/// Intents driving the request state machine.
///
/// Staleness is handled one layer up: the app drops worker events whose
/// generation does not match the current submission before they ever reach
/// the reducer.
#[derive(Debug, Clone)]
pub enum RequestIntent {
    /// A new submission started; previous results and errors are discarded.
    Submitted,

    /// 500 ms progress-indicator tick.
    ProgressTick,

    /// The in-flight request resolved.
    Completed {
        result: Result<Vec<SummaryItem>, String>,
    },
}

impl Intent for RequestIntent {}
