pub mod controls;
pub mod dialog;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};

use super::app::App;
use super::layout::compute_layout;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = app.theme.clone();

    // Background fill
    let bg_style = Style::default().bg(theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let (cols, rows) = app.window_size;
    let layout = compute_layout(area, cols, rows);
    app.layout = Some(layout);

    // Window frame with the title in the top border
    frame.render_widget(Clear, layout.window);
    let window = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border).bg(theme.background))
        .title(Span::styled(
            format!(" {} ", app.title),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .style(bg_style);
    frame.render_widget(window, layout.window);

    controls::render_input_row(frame, app, &layout);
    task_list::render_task_list(frame, app, layout.list);
    controls::render_button_row(frame, app, &layout);

    // Modal dialog (rendered on top of everything)
    if app.dialog.is_some() {
        dialog::render_dialog(frame, app, layout.window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn window_shows_all_controls() {
        let mut app = app_with_tasks(&[("Buy milk", false), ("Walk dog", true)]);
        let output = render_app(&mut app, 80, 40);

        assert!(output.contains(" To-Do List "));
        assert!(output.contains("Add Task"));
        assert!(output.contains("Delete Selected"));
        assert!(output.contains("Clear Completed"));
        assert!(output.contains("[ ] Buy milk"));
        assert!(output.contains("[x] Walk dog"));
    }

    #[test]
    fn render_records_layout() {
        let mut app = app_with_tasks(&[]);
        assert!(app.layout.is_none());
        render_app(&mut app, 80, 40);
        let layout = app.layout.unwrap();
        assert_eq!(layout.window, ratatui::layout::Rect::new(15, 5, 50, 30));
    }

    #[test]
    fn custom_title_in_frame() {
        let mut app = app_with_tasks(&[]);
        app.title = "Chores".into();
        let output = render_app(&mut app, 80, 40);
        assert!(output.contains(" Chores "));
        assert!(!output.contains("To-Do List"));
    }

    #[test]
    fn dialog_drawn_over_window() {
        let mut app = app_with_tasks(&[]);
        app.show_warning("Task cannot be empty.");
        let output = render_app(&mut app, 80, 40);
        assert!(output.contains(" Error "));
        assert!(output.contains("Task cannot be empty."));
        assert!(output.contains("OK"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.show_warning("Please select task(s) to delete.");
        render_app(&mut app, 10, 5);
        render_app(&mut app, 1, 1);
    }
}
