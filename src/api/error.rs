use thiserror::Error;

/// Errors that can occur while talking to the summarization service.
///
/// The UI never inspects these structurally; they are flattened into a
/// human-readable message at the orchestration boundary. The taxonomy
/// exists so each failure class renders a sensible message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status. `message` is the body's
    /// `error` field when it parsed, otherwise a generic message embedding
    /// the status code.
    #[error("{message}")]
    Server { message: String },

    /// 2xx response whose body matches neither success shape.
    #[error("Unexpected response from summarization service: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Generic message for an error response without a usable JSON body.
    pub fn generic_server_message(status: u16) -> String {
        format!("Summarization service returned HTTP {}", status)
    }
}
