//! Rendering of the results accordion.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::api::SummaryItem;
use crate::markdown;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};

use super::state::AccordionState;
use super::title::display_title;

/// Build the text lines for the whole accordion.
///
/// Collapsed panels contribute a single header line; expanded ones add the
/// normalized markdown body and a source link. `selected` marks the panel
/// the cursor is on (highlighted only while the results area has focus).
pub fn panel_lines(
    items: &[SummaryItem],
    accordion: &AccordionState,
    selected: usize,
    results_focused: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let open = accordion.is_open(index);
        let marker = if open { "▼" } else { "▶" };

        let mut header = Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(ACCENT)),
            Span::styled(
                display_title(item),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        if results_focused && index == selected {
            header = header.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(header);

        if open {
            for body_line in markdown::normalize(&item.body).split('\n') {
                lines.push(Line::from(Span::styled(
                    format!("   {}", body_line),
                    Style::default().fg(HEADER_TEXT),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("   View original: {}", item.source_url),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}
