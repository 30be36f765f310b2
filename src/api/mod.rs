//! HTTP client for the summarization service.
//!
//! The service exposes a single endpoint, `POST /api/summarize`, which takes
//! a catalogue URL and responds either with a list of per-patch-note
//! summaries or with one combined summary. Errors come back as non-2xx
//! statuses with a JSON `{error}` body.

mod client;
mod error;
mod types;

pub use client::SummarizeClient;
pub use types::{SummarizeRequest, SummaryItem};
