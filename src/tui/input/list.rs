use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::*;

/// Keyboard handling while the task list has focus.
///
/// Keys move the lead row and change the selection; they never change
/// completion, which is a mouse action.
pub(super) fn handle_list_key(app: &mut App, key: KeyEvent) {
    let len = app.tasks.len();
    if len == 0 {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let page = app.list_height().max(1);
    let cursor = app.list.cursor;

    let target = match key.code {
        KeyCode::Up => cursor.saturating_sub(1),
        KeyCode::Down => (cursor + 1).min(len - 1),
        KeyCode::PageUp => cursor.saturating_sub(page),
        KeyCode::PageDown => (cursor + page).min(len - 1),
        KeyCode::Home => 0,
        KeyCode::End => len - 1,
        KeyCode::Char(' ') => {
            app.list.toggle_selected(cursor);
            return;
        }
        KeyCode::Char('a') if ctrl => {
            app.list.select_all(len);
            return;
        }
        _ => return,
    };

    if shift {
        app.list.select_range(target);
    } else if ctrl {
        // Move the lead without touching the selection
        app.list.cursor = target;
    } else {
        app.list.select_only(target);
    }
    app.list.ensure_visible(app.list_height(), len);
}

/// A press inside the list body.
///
/// `clicks` is the click count from the tracker; only a plain single click
/// toggles completion.
pub(super) fn handle_list_click(
    app: &mut App,
    col: u16,
    row: u16,
    modifiers: KeyModifiers,
    clicks: u32,
) {
    let Some(layout) = app.layout else {
        return;
    };
    let Some(line) = layout.list_line_at(col, row) else {
        return;
    };
    let index = app.list.scroll_offset + line;
    if index >= app.tasks.len() {
        return;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        app.list.toggle_selected(index);
    } else if modifiers.contains(KeyModifiers::SHIFT) {
        app.list.select_range(index);
    } else {
        app.list.select_only(index);
        if modifiers.is_empty() && clicks == 1 {
            toggle_row_action(app, index);
        }
    }
}
