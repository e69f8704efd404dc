use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::layout::{OK_LABEL, dialog_layout};

use super::controls::render_button;

/// Render the modal warning centered over the window
pub fn render_dialog(frame: &mut Frame, app: &App, window: Rect) {
    let Some(dialog) = &app.dialog else {
        return;
    };
    let geometry = dialog_layout(window, &dialog.message);

    let bg = app.theme.background;
    let warning = app.theme.warning;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    frame.render_widget(Clear, geometry.popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(warning).bg(bg))
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default().fg(warning).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    frame.render_widget(block, geometry.popup);

    let lines: Vec<Line> = geometry
        .lines
        .into_iter()
        .map(|text| Line::from(Span::styled(text, text_style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), geometry.message);

    // OK always carries focus while the dialog is open
    render_button(frame, &app.theme, OK_LABEL, geometry.ok_button, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::NO_SELECTION_WARNING;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn nothing_without_dialog() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(50, 30, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert_eq!(output, "");
    }

    #[test]
    fn popup_box() {
        let mut app = app_with_tasks(&[]);
        app.show_warning(NO_SELECTION_WARNING);
        let output = render_to_string(50, 30, |frame, area| {
            render_dialog(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        // 40 wide popup centered in a 50 wide window, top row 11
        assert_eq!(lines.len(), 19);
        assert!(lines[11].starts_with("     ┌ Error "));
        assert!(lines[13].contains("Please select task(s) to delete."));
        assert!(lines[16].contains("│ OK │"));
        assert!(lines[18].starts_with("     └"));
    }

    #[test]
    fn border_uses_warning_color() {
        let mut app = app_with_tasks(&[]);
        app.show_warning("Task cannot be empty.");
        let buf = render_to_buffer(50, 30, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert_eq!(buf[(5, 11)].fg, app.theme.warning);
    }

    #[test]
    fn long_message_wraps() {
        let mut app = app_with_tasks(&[]);
        app.show_warning("word ".repeat(20).trim_end().to_string());
        let output = render_to_string(50, 30, |frame, area| {
            render_dialog(frame, &app, area);
        });
        let word_rows = output.lines().filter(|l| l.contains("word")).count();
        assert_eq!(word_rows, 3);
    }
}
