mod actions;
mod dialog;
mod list;
mod text;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, Focus};
use super::layout::Control;

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use actions::*;
#[allow(unused_imports)]
use dialog::*;
#[allow(unused_imports)]
use list::*;
#[allow(unused_imports)]
use text::*;

/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: isize = 3;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Window close
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.should_quit = true;
        return;
    }

    if app.dialog.is_some() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::TextField => handle_text_key(app, key),
        Focus::List => handle_list_key(app, key),
        Focus::AddButton | Focus::DeleteButton | Focus::ClearButton => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                activate_focused(app);
            }
        }
    }
}

/// Handle a mouse event. `now` feeds double-click detection.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.dialog.is_some() {
                handle_dialog_click(app, col, row);
                return;
            }
            let clicks = app.clicks.register(now, col, row);
            handle_click(app, col, row, mouse.modifiers, clicks);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if app.dialog.is_none() => {
            let over_list = app
                .layout
                .is_some_and(|l| l.hit_test(col, row) == Some(Control::List));
            if over_list {
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    -WHEEL_STEP
                } else {
                    WHEEL_STEP
                };
                let height = app.list_height();
                app.list.scroll_by(delta, height, app.tasks.len());
            }
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, col: u16, row: u16, modifiers: KeyModifiers, clicks: u32) {
    let Some(layout) = app.layout else {
        return;
    };
    let Some(control) = layout.hit_test(col, row) else {
        return;
    };
    match control {
        Control::TextField => {
            app.focus = Focus::TextField;
            let body = layout.text_inner();
            if col >= body.x {
                app.input.click((col - body.x) as usize);
            }
        }
        Control::AddButton => {
            app.focus = Focus::AddButton;
            add_task_action(app);
        }
        Control::DeleteButton => {
            app.focus = Focus::DeleteButton;
            delete_selected_action(app);
        }
        Control::ClearButton => {
            app.focus = Focus::ClearButton;
            clear_completed_action(app);
        }
        Control::List => {
            app.focus = Focus::List;
            handle_list_click(app, col, row, modifiers, clicks);
        }
    }
}

/// Handle a bracketed paste event. Only the text field accepts pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.dialog.is_some() || app.focus != Focus::TextField || text.is_empty() {
        return;
    }
    app.input.insert_str(text);
}
