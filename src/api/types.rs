use serde::{Deserialize, Serialize};

/// Request body for `POST /api/summarize`.
///
/// Optional fields are omitted from the wire entirely when absent; the
/// service distinguishes "not provided" from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    /// Catalogue URL: a page linking to multiple individual patch notes.
    pub url: String,
    /// Example patch-note link that helps the service pick out similar
    /// links when the catalogue structure is ambiguous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    /// ISO date; only notes published after it are summarized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_date: Option<String>,
    /// How many patch notes to summarize (1..=10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_patch_notes: Option<u8>,
}

/// One summarized patch note, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Markdown body of the summary.
    #[serde(rename = "summary")]
    pub body: String,
    /// Link back to the original patch note.
    #[serde(rename = "url")]
    pub source_url: String,
}

/// Success response, in either of the two shapes the service emits.
///
/// Newer deployments return a `patch_notes` array; older ones return a
/// single `summary` string for the whole catalogue. Both are accepted and
/// normalized into a list of [`SummaryItem`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    PatchNotes {
        patch_notes: Vec<SummaryItem>,
    },
    Single {
        summary: String,
        #[serde(default)]
        original_url: Option<String>,
    },
}

impl SummarizeResponse {
    /// Flatten into an ordered result set. `requested_url` fills in the
    /// source link when the single-summary shape omits one.
    pub fn into_items(self, requested_url: &str) -> Vec<SummaryItem> {
        match self {
            Self::PatchNotes { patch_notes } => patch_notes,
            Self::Single {
                summary,
                original_url,
            } => vec![SummaryItem {
                title: None,
                date: None,
                version: None,
                body: summary,
                source_url: original_url.unwrap_or_else(|| requested_url.to_string()),
            }],
        }
    }
}

/// Error body accompanying a non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_absent_fields() {
        let request = SummarizeRequest {
            url: "https://example.com/patches".into(),
            reference_url: None,
            cutoff_date: None,
            max_patch_notes: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"url": "https://example.com/patches"})
        );
    }

    #[test]
    fn request_serializes_present_fields() {
        let request = SummarizeRequest {
            url: "https://example.com/patches".into(),
            reference_url: Some("https://example.com/patches/1".into()),
            cutoff_date: Some("2024-01-01".into()),
            max_patch_notes: Some(5),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["reference_url"], "https://example.com/patches/1");
        assert_eq!(json["cutoff_date"], "2024-01-01");
        assert_eq!(json["max_patch_notes"], 5);
    }

    #[test]
    fn parses_patch_notes_shape() {
        let body = r#"{"patch_notes":[{"title":"Patch A","summary":"* fixed","url":"https://x"}]}"#;
        let response: SummarizeResponse = serde_json::from_str(body).unwrap();
        let items = response.into_items("https://example.com");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Patch A"));
        assert_eq!(items[0].body, "* fixed");
        assert_eq!(items[0].source_url, "https://x");
        assert_eq!(items[0].date, None);
        assert_eq!(items[0].version, None);
    }

    #[test]
    fn parses_single_summary_shape() {
        let body = r#"{"summary":"All quiet.","original_url":"https://x/notes"}"#;
        let response: SummarizeResponse = serde_json::from_str(body).unwrap();
        let items = response.into_items("https://example.com");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, None);
        assert_eq!(items[0].body, "All quiet.");
        assert_eq!(items[0].source_url, "https://x/notes");
    }

    #[test]
    fn single_summary_falls_back_to_requested_url() {
        let body = r#"{"summary":"All quiet."}"#;
        let response: SummarizeResponse = serde_json::from_str(body).unwrap();
        let items = response.into_items("https://example.com/patches");
        assert_eq!(items[0].source_url, "https://example.com/patches");
    }

    #[test]
    fn preserves_response_order() {
        let body = r#"{"patch_notes":[
            {"summary":"a","url":"https://1"},
            {"summary":"b","url":"https://2"},
            {"summary":"c","url":"https://3"}
        ]}"#;
        let response: SummarizeResponse = serde_json::from_str(body).unwrap();
        let items = response.into_items("https://example.com");
        let bodies: Vec<&str> = items.iter().map(|i| i.body.as_str()).collect();
        assert_eq!(bodies, ["a", "b", "c"]);
    }
}
