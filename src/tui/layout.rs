use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::model::WindowConfig;
use crate::util::unicode::display_width;

/// Logical units covered by one terminal cell, horizontally and vertically
pub const CELL_WIDTH: u16 = 10;
pub const CELL_HEIGHT: u16 = 20;

pub const ADD_LABEL: &str = "Add Task";
pub const DELETE_LABEL: &str = "Delete Selected";
pub const CLEAR_LABEL: &str = "Clear Completed";

/// Horizontal gap between the two bottom buttons
const BUTTON_GAP: u16 = 2;

/// An interactive control inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TextField,
    AddButton,
    List,
    DeleteButton,
    ClearButton,
}

/// Screen rectangles of the window and every control, recomputed each frame
/// and kept around for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub window: Rect,
    pub text_field: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub delete_button: Rect,
    pub clear_button: Rect,
}

/// Window size in cells for the configured logical size
pub fn window_cells(config: &WindowConfig) -> (u16, u16) {
    (
        (config.width / CELL_WIDTH).max(1),
        (config.height / CELL_HEIGHT).max(1),
    )
}

/// Center a `width` x `height` window in `area`, shrinking it to fit
pub fn centered_window(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Width of a bordered button with one cell of padding on each side
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Lay out the window and its controls:
///
/// ```text
/// ┌ To-Do List ─────────────────────┐
/// │ ┌text field──────┐ ┌Add Task┐   │
/// │ ┌list──────────────────────────┐│
/// │ └──────────────────────────────┘│
/// │   ┌Delete Selected┐ ┌Clear…┐    │
/// └─────────────────────────────────┘
/// ```
pub fn compute_layout(area: Rect, cols: u16, rows: u16) -> WindowLayout {
    let window = centered_window(cols, rows, area);

    // Inside the border, with one column of padding on each side
    let inner = Rect::new(
        window.x + 2,
        window.y + 1,
        window.width.saturating_sub(4),
        window.height.saturating_sub(2),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // text field + add button
            Constraint::Min(3),    // task list
            Constraint::Length(3), // delete / clear buttons
        ])
        .split(inner);
    let (top, middle, bottom) = (chunks[0], chunks[1], chunks[2]);

    let add_w = button_width(ADD_LABEL).min(top.width);
    let field_w = top.width.saturating_sub(add_w + 1);
    let text_field = Rect::new(top.x, top.y, field_w, top.height);
    let add_button = Rect::new(top.x + top.width - add_w, top.y, add_w, top.height);

    let delete_w = button_width(DELETE_LABEL);
    let clear_w = button_width(CLEAR_LABEL);
    let total = delete_w + BUTTON_GAP + clear_w;
    let start = bottom.x + bottom.width.saturating_sub(total) / 2;
    let delete_button = Rect::new(start, bottom.y, delete_w, bottom.height).intersection(bottom);
    let clear_button = Rect::new(
        start + delete_w + BUTTON_GAP,
        bottom.y,
        clear_w,
        bottom.height,
    )
    .intersection(bottom);

    WindowLayout {
        window,
        text_field,
        add_button,
        list: middle,
        delete_button,
        clear_button,
    }
}

/// Area inside a one-cell border
pub fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

/// Geometry of the modal warning dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub popup: Rect,
    pub message: Rect,
    pub ok_button: Rect,
    /// Message text wrapped to `message.width`
    pub lines: Vec<String>,
}

pub const OK_LABEL: &str = "OK";

/// Center a dialog for `message` over `window`
pub fn dialog_layout(window: Rect, message: &str) -> DialogLayout {
    let popup_w: u16 = 40.min(window.width.saturating_sub(2));
    let text_w = popup_w.saturating_sub(4);
    let lines = wrap_words(message, text_w as usize);
    // border, blank, message, blank, button, border
    let popup_h = (lines.len() as u16 + 7).min(window.height);
    let popup = centered_window(popup_w, popup_h, window);

    let message = Rect::new(popup.x + 2, popup.y + 2, text_w, lines.len() as u16)
        .intersection(popup);
    let ok_w = button_width(OK_LABEL).min(popup.width);
    let ok_button = Rect::new(
        popup.x + (popup.width - ok_w) / 2,
        message.y + message.height + 1,
        ok_w,
        3,
    )
    .intersection(popup);

    DialogLayout {
        popup,
        message,
        ok_button,
        lines,
    }
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Words longer than a line are kept whole on their own line.
fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };
        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

impl WindowLayout {
    /// Which control, if any, covers the cell at (`col`, `row`)
    pub fn hit_test(&self, col: u16, row: u16) -> Option<Control> {
        let pos = Position::new(col, row);
        [
            (self.text_field, Control::TextField),
            (self.add_button, Control::AddButton),
            (self.list, Control::List),
            (self.delete_button, Control::DeleteButton),
            (self.clear_button, Control::ClearButton),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, control)| control)
    }

    /// Rows available for tasks inside the list border
    pub fn list_inner(&self) -> Rect {
        inner(self.list)
    }

    pub fn text_inner(&self) -> Rect {
        inner(self.text_field)
    }

    /// Visible line offset of `row` within the list body, or None when the
    /// row is on the border or outside the list.
    pub fn list_line_at(&self, col: u16, row: u16) -> Option<usize> {
        let body = self.list_inner();
        body.contains(Position::new(col, row))
            .then(|| (row - body.y) as usize)
    }
}
