use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::api::SummaryItem;
use crate::markdown;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::FormField;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::results::{panel_lines, AccordionState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

const FORM_FIELDS: [FormField; 4] = [
    FormField::Url,
    FormField::ReferenceUrl,
    FormField::CutoffDate,
    FormField::MaxItems,
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, form, results, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.service_base_url()), header);

    frame.render_widget(form_widget(app), form);

    frame.render_widget(Clear, results);
    frame.render_widget(results_widget(app, results.height), results);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, context_hint(app)), footer);
}

fn form_widget(app: &App) -> Paragraph<'static> {
    let mut lines = Vec::new();

    for field in FORM_FIELDS {
        let focused = app.focus() == Focus::Field(field);
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };

        let value = if field == FormField::MaxItems {
            let count = app.form().max_patch_notes;
            let noun = if count == 1 { "patch note" } else { "patch notes" };
            format!("{} {}", count, noun)
        } else {
            app.form().value(field).to_string()
        };

        let mut spans = vec![
            Span::styled(format!(" {:<14}", field.label()), label_style),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ];
        if focused && field.is_text() {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }

        let mut line = Line::from(spans);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(status_line(app));

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Summarize ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// One line summarizing where the request stands, mirroring the request
/// state machine: validation error > in-flight > failed > succeeded > idle.
fn status_line(app: &App) -> Line<'static> {
    if let Some(error) = app.form_error() {
        return Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
    }

    let request = app.request();
    if request.is_pending() {
        let dots = ".".repeat(request.progress_dots() as usize);
        return Line::from(Span::styled(
            format!(" Summarizing{}", dots),
            Style::default().fg(ACCENT),
        ));
    }
    if let Some(message) = request.error_message() {
        return Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    let items = request.items();
    if !items.is_empty() {
        return Line::from(Span::styled(
            format!(" {} summaries ready", items.len()),
            Style::default().fg(STATUS_OK),
        ));
    }

    Line::from(Span::styled(
        " Press Enter to summarize",
        Style::default().fg(MUTED_TEXT),
    ))
}

fn results_widget(app: &App, viewport_height: u16) -> Paragraph<'static> {
    let items = app.request().items();
    let results_focused = app.focus() == Focus::Results;
    let lines = panel_lines(items, app.accordion(), app.selected_panel(), results_focused);

    let inner_height = viewport_height.saturating_sub(2);
    let offset = scroll_offset(
        items,
        app.accordion(),
        app.selected_panel(),
        inner_height as usize,
    );

    Paragraph::new(lines)
        .scroll((offset as u16, 0))
        .block(
            Block::default()
                .title(Span::styled(" Summaries ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// Scroll so the selected panel's header is visible: stay at the top while
/// it fits, otherwise pin the selected header to the first row.
fn scroll_offset(
    items: &[SummaryItem],
    accordion: &AccordionState,
    selected: usize,
    viewport_height: usize,
) -> usize {
    let mut header_line = 0usize;
    for (index, item) in items.iter().enumerate() {
        if index == selected {
            break;
        }
        header_line += 1; // header
        if accordion.is_open(index) {
            header_line += markdown::normalize(&item.body).split('\n').count();
            header_line += 1; // source link
        }
        header_line += 1; // separator
    }

    if viewport_height == 0 || header_line < viewport_height {
        0
    } else {
        header_line
    }
}

fn context_hint(app: &App) -> &'static str {
    match app.focus() {
        Focus::Field(field) => field.hint(),
        Focus::Results => "Enter/Space toggles the selected summary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::Reducer;
    use crate::ui::results::{AccordionIntent, AccordionReducer};

    fn item(body: &str) -> SummaryItem {
        SummaryItem {
            title: None,
            date: None,
            version: None,
            body: body.into(),
            source_url: "https://x".into(),
        }
    }

    #[test]
    fn scroll_stays_at_top_while_selection_fits() {
        let items = vec![item("a"), item("b")];
        let accordion = AccordionState::default();
        assert_eq!(scroll_offset(&items, &accordion, 1, 10), 0);
    }

    #[test]
    fn scroll_pins_far_selection_to_first_row() {
        let items: Vec<SummaryItem> = (0..10).map(|_| item("a")).collect();
        // All collapsed: each panel is 2 lines, panel 7 starts at line 14.
        let accordion = AccordionState::default();
        assert_eq!(scroll_offset(&items, &accordion, 7, 5), 14);
    }

    #[test]
    fn scroll_accounts_for_expanded_bodies() {
        let items = vec![item("line1\nline2"), item("b")];
        let accordion = AccordionReducer::reduce(
            AccordionState::default(),
            AccordionIntent::Reset { item_count: 2 },
        );
        // Panel 0: header + 2 body lines + link + separator = 5 lines.
        assert_eq!(scroll_offset(&items, &accordion, 1, 3), 5);
    }
}
