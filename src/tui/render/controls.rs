use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::tui::layout::{ADD_LABEL, CLEAR_LABEL, DELETE_LABEL, WindowLayout, inner};
use crate::tui::theme::Theme;

/// Text entry field and the "Add Task" button
pub fn render_input_row(frame: &mut Frame, app: &mut App, layout: &WindowLayout) {
    let theme = &app.theme;
    let focused = app.focus == Focus::TextField && app.dialog.is_none();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.border_color(focused))
                .bg(theme.background),
        )
        .style(Style::default().bg(theme.background));
    frame.render_widget(block, layout.text_field);

    let body = inner(layout.text_field);
    let text_style = Style::default().fg(theme.text_bright).bg(theme.background);
    let (visible, cursor_col) = app.input.view(body.width as usize);
    let paragraph = Paragraph::new(Line::from(Span::styled(visible.to_string(), text_style)));
    frame.render_widget(paragraph, body);

    if focused && !body.is_empty() {
        let x = body.x + (cursor_col as u16).min(body.width - 1);
        frame.set_cursor_position(Position::new(x, body.y));
    }

    render_button(
        frame,
        &app.theme,
        ADD_LABEL,
        layout.add_button,
        app.focus == Focus::AddButton,
    );
}

/// "Delete Selected" and "Clear Completed" along the bottom
pub fn render_button_row(frame: &mut Frame, app: &App, layout: &WindowLayout) {
    render_button(
        frame,
        &app.theme,
        DELETE_LABEL,
        layout.delete_button,
        app.focus == Focus::DeleteButton,
    );
    render_button(
        frame,
        &app.theme,
        CLEAR_LABEL,
        layout.clear_button,
        app.focus == Focus::ClearButton,
    );
}

/// A bordered, centered label. Focus swaps the border to the highlight
/// color and bolds the label.
pub fn render_button(frame: &mut Frame, theme: &Theme, label: &str, area: Rect, focused: bool) {
    let mut label_style = Style::default().fg(theme.text_bright).bg(theme.background);
    if focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.border_color(focused))
                .bg(theme.background),
        )
        .style(Style::default().bg(theme.background));
    let paragraph = Paragraph::new(Line::from(Span::styled(label.to_string(), label_style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn button_box() {
        let theme = Theme::default();
        let output = render_to_string(12, 3, |frame, area| {
            render_button(frame, &theme, ADD_LABEL, area, false);
        });
        assert_snapshot!(output, @r"
        ┌──────────┐
        │ Add Task │
        └──────────┘
        ");
    }

    #[test]
    fn focused_button_is_bold_and_highlighted() {
        let theme = Theme::default();
        let buf = render_to_buffer(12, 3, |frame, area| {
            render_button(frame, &theme, ADD_LABEL, area, true);
        });
        assert_eq!(buf[(0, 0)].fg, theme.highlight);
        assert!(buf[(2, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn text_field_scrolls_long_input() {
        let mut app = app_with_tasks(&[]);
        app.input.insert_str("a very long task description that will not fit");
        let output = render_app(&mut app, 80, 40);
        // 31 visible cells, cursor parked in the last one
        assert!(output.contains("description that will not fit"));
        assert!(!output.contains("a very long"));
    }
}
