//! State for the submission form.

use thiserror::Error;

use crate::api::SummarizeRequest;
use crate::ui::mvi::UiState;

pub const MIN_PATCH_NOTES: u8 = 1;
pub const MAX_PATCH_NOTES: u8 = 10;

/// Identity of a form field, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Url,
    ReferenceUrl,
    CutoffDate,
    MaxItems,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Url => Self::ReferenceUrl,
            Self::ReferenceUrl => Self::CutoffDate,
            Self::CutoffDate => Self::MaxItems,
            Self::MaxItems => Self::Url,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Url => Self::MaxItems,
            Self::ReferenceUrl => Self::Url,
            Self::CutoffDate => Self::ReferenceUrl,
            Self::MaxItems => Self::CutoffDate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "Catalogue URL",
            Self::ReferenceUrl => "Reference URL",
            Self::CutoffDate => "Cutoff date",
            Self::MaxItems => "Patch notes",
        }
    }

    /// One-line help shown while the field has focus.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Url => "A page that links to multiple patch notes, e.g. a game's updates page",
            Self::ReferenceUrl => {
                "Optional: one example patch note link, helps with complex catalogues"
            }
            Self::CutoffDate => "Optional: ISO date, only summarize notes published after it",
            Self::MaxItems => "How many patch notes to summarize (more takes longer)",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Self::MaxItems)
    }
}

/// Values of the submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub url: String,
    pub reference_url: String,
    pub cutoff_date: String,
    pub max_patch_notes: u8,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            url: String::new(),
            reference_url: String::new(),
            cutoff_date: String::new(),
            max_patch_notes: 3,
        }
    }
}

impl UiState for FormState {}

/// Validation failures surfaced inline under the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Enter a catalogue URL first")]
    MissingUrl,

    #[error("Catalogue URL is not a valid http(s) URL")]
    InvalidUrl,

    #[error("Reference URL is not a valid http(s) URL")]
    InvalidReferenceUrl,
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Url => &self.url,
            FormField::ReferenceUrl => &self.reference_url,
            FormField::CutoffDate => &self.cutoff_date,
            FormField::MaxItems => "",
        }
    }

    pub(super) fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Url => Some(&mut self.url),
            FormField::ReferenceUrl => Some(&mut self.reference_url),
            FormField::CutoffDate => Some(&mut self.cutoff_date),
            FormField::MaxItems => None,
        }
    }

    /// Validate the form and build the outgoing request.
    ///
    /// Empty optional fields become absent rather than empty strings; the
    /// service treats those differently. The cutoff date is passed through
    /// opaquely; the service owns its format validation.
    pub fn to_request(&self) -> Result<SummarizeRequest, FormError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(FormError::MissingUrl);
        }
        if !is_http_url(url) {
            return Err(FormError::InvalidUrl);
        }

        let reference_url = match self.reference_url.trim() {
            "" => None,
            reference => {
                if !is_http_url(reference) {
                    return Err(FormError::InvalidReferenceUrl);
                }
                Some(reference.to_string())
            }
        };

        let cutoff_date = match self.cutoff_date.trim() {
            "" => None,
            date => Some(date.to_string()),
        };

        Ok(SummarizeRequest {
            url: url.to_string(),
            reference_url,
            cutoff_date,
            max_patch_notes: Some(self.max_patch_notes),
        })
    }
}

fn is_http_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_cycles() {
        let mut field = FormField::Url;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Url);
        assert_eq!(FormField::Url.prev(), FormField::MaxItems);
    }

    #[test]
    fn empty_url_is_rejected() {
        let form = FormState::default();
        assert_eq!(form.to_request().unwrap_err(), FormError::MissingUrl);
    }

    #[test]
    fn malformed_url_is_rejected() {
        let form = FormState {
            url: "not a url".into(),
            ..FormState::default()
        };
        assert_eq!(form.to_request().unwrap_err(), FormError::InvalidUrl);
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let form = FormState {
            url: "file:///etc/passwd".into(),
            ..FormState::default()
        };
        assert_eq!(form.to_request().unwrap_err(), FormError::InvalidUrl);
    }

    #[test]
    fn malformed_reference_url_is_rejected() {
        let form = FormState {
            url: "https://example.com/patches".into(),
            reference_url: "nope".into(),
            ..FormState::default()
        };
        assert_eq!(
            form.to_request().unwrap_err(),
            FormError::InvalidReferenceUrl
        );
    }

    #[test]
    fn empty_optionals_become_absent() {
        let form = FormState {
            url: "https://example.com/patches".into(),
            ..FormState::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.reference_url, None);
        assert_eq!(request.cutoff_date, None);
        assert_eq!(request.max_patch_notes, Some(3));
    }

    #[test]
    fn filled_form_builds_full_request() {
        let form = FormState {
            url: "https://example.com/patches".into(),
            reference_url: "https://example.com/patches/42".into(),
            cutoff_date: "2024-01-01".into(),
            max_patch_notes: 7,
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.url, "https://example.com/patches");
        assert_eq!(
            request.reference_url.as_deref(),
            Some("https://example.com/patches/42")
        );
        assert_eq!(request.cutoff_date.as_deref(), Some("2024-01-01"));
        assert_eq!(request.max_patch_notes, Some(7));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let form = FormState {
            url: "  https://example.com/patches  ".into(),
            cutoff_date: "  ".into(),
            ..FormState::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.url, "https://example.com/patches");
        assert_eq!(request.cutoff_date, None);
    }
}
