use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};
use crate::ui::form::FormField;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Esc => {
            app.focus_form();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Field(FormField::MaxItems) => match key.code {
            KeyCode::Up => app.step_max_items(1),
            KeyCode::Down => app.step_max_items(-1),
            KeyCode::Enter => app.submit(),
            _ => {}
        },
        Focus::Field(_) => match key.code {
            KeyCode::Enter => app.submit(),
            KeyCode::Backspace => app.on_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.on_char(ch);
            }
            _ => {}
        },
        Focus::Results => match key.code {
            KeyCode::Up => app.move_panel_selection(-1),
            KeyCode::Down => app.move_panel_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_panel(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
