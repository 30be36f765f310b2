//! Display title derivation for summary items.

use crate::api::SummaryItem;

/// Fallback when the service provided no structured title.
const FALLBACK_TITLE: &str = "Patch Notes Summary";

/// Derive the panel header text from an item's optional metadata.
///
/// Fixed order: title, then the date in parentheses, then the version after
/// a hyphen. Date and version are independently optional suffixes; without
/// a title neither is shown.
pub fn display_title(item: &SummaryItem) -> String {
    let Some(base) = item.title.as_deref() else {
        return FALLBACK_TITLE.to_string();
    };

    let mut title = base.to_string();
    if let Some(date) = item.date.as_deref() {
        title.push_str(&format!(" ({})", date));
    }
    if let Some(version) = item.version.as_deref() {
        title.push_str(&format!(" - {}", version));
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: Option<&str>, date: Option<&str>, version: Option<&str>) -> SummaryItem {
        SummaryItem {
            title: title.map(String::from),
            date: date.map(String::from),
            version: version.map(String::from),
            body: String::new(),
            source_url: "https://example.com".into(),
        }
    }

    #[test]
    fn falls_back_without_title() {
        assert_eq!(display_title(&item(None, None, None)), "Patch Notes Summary");
        // Date and version alone do not produce a title.
        assert_eq!(
            display_title(&item(None, Some("2024-01-01"), Some("1.2"))),
            "Patch Notes Summary"
        );
    }

    #[test]
    fn title_alone_has_no_trailing_artifacts() {
        assert_eq!(display_title(&item(Some("Patch A"), None, None)), "Patch A");
    }

    #[test]
    fn full_metadata_in_fixed_order() {
        assert_eq!(
            display_title(&item(Some("Patch A"), Some("2024-01-01"), Some("1.2"))),
            "Patch A (2024-01-01) - 1.2"
        );
    }

    #[test]
    fn suffixes_are_independently_optional() {
        assert_eq!(
            display_title(&item(Some("Patch A"), Some("2024-01-01"), None)),
            "Patch A (2024-01-01)"
        );
        assert_eq!(
            display_title(&item(Some("Patch A"), None, Some("1.2"))),
            "Patch A - 1.2"
        );
    }
}
