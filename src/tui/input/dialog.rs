use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Position;

use crate::tui::app::App;
use crate::tui::layout::dialog_layout;

/// The dialog is modal: it consumes every key, closing on Enter, Esc or Space.
pub(super) fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dialog = None;
    }
}

/// Clicks only count on the OK button; everything else is swallowed.
pub(super) fn handle_dialog_click(app: &mut App, col: u16, row: u16) {
    let (Some(dialog), Some(layout)) = (&app.dialog, app.layout) else {
        return;
    };
    let geometry = dialog_layout(layout.window, &dialog.message);
    if geometry.ok_button.contains(Position::new(col, row)) {
        app.dialog = None;
    }
}
