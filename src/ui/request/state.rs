//! State for the summarization request lifecycle.

use crate::api::SummaryItem;
use crate::ui::mvi::UiState;

/// Lifecycle of the current (or most recent) summarization request.
///
/// Exactly one of these exists at a time; a new submission replaces the
/// whole value, so stale results and errors never linger.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Pending {
        /// Cosmetic loading-dots counter, cycling 0..=3.
        progress_dots: u8,
    },

    /// The service answered with a result set (response order preserved).
    Succeeded { items: Vec<SummaryItem> },

    /// The request failed; `message` is ready for inline display.
    Failed { message: String },
}

impl UiState for RequestState {}

impl RequestState {
    /// True while a request is in flight. The submit trigger is disabled
    /// whenever this holds.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Current loading-dots count; always 0 outside Pending.
    pub fn progress_dots(&self) -> u8 {
        match self {
            Self::Pending { progress_dots } => *progress_dots,
            _ => 0,
        }
    }

    /// The result set, when the last request succeeded.
    pub fn items(&self) -> &[SummaryItem] {
        match self {
            Self::Succeeded { items } => items,
            _ => &[],
        }
    }

    /// The failure message, when the last request failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(RequestState::default(), RequestState::Idle);
    }

    #[test]
    fn pending_check() {
        assert!(!RequestState::Idle.is_pending());
        assert!(RequestState::Pending { progress_dots: 2 }.is_pending());
        assert!(!RequestState::Failed {
            message: "err".into()
        }
        .is_pending());
    }

    #[test]
    fn progress_dots_zero_outside_pending() {
        assert_eq!(RequestState::Idle.progress_dots(), 0);
        assert_eq!(
            RequestState::Succeeded { items: vec![] }.progress_dots(),
            0
        );
        assert_eq!(
            RequestState::Pending { progress_dots: 3 }.progress_dots(),
            3
        );
    }

    #[test]
    fn items_empty_outside_succeeded() {
        assert!(RequestState::Idle.items().is_empty());
        assert!(RequestState::Pending { progress_dots: 0 }.items().is_empty());
    }

    #[test]
    fn error_message_only_when_failed() {
        assert_eq!(RequestState::Idle.error_message(), None);
        assert_eq!(
            RequestState::Failed {
                message: "boom".into()
            }
            .error_message(),
            Some("boom")
        );
    }
}
