use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Task};
use crate::tui::app::App;

/// Render into an in-memory buffer and return it with styles intact.
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Plain text of a buffer, trailing whitespace and blank lines trimmed.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w.max(1))
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    buffer_to_string(&render_to_buffer(w, h, f))
}

/// An App with the default config holding `tasks` as (description, completed).
pub fn app_with_tasks(tasks: &[(&str, bool)]) -> App {
    let mut app = App::new(&AppConfig::default());
    for (description, completed) in tasks {
        let mut task = Task::new(*description);
        task.completed = *completed;
        app.tasks.tasks_mut().push(task);
    }
    app
}

/// Draw the whole window for `app` and return the styled buffer.
pub fn render_app_buffer(app: &mut App, w: u16, h: u16) -> Buffer {
    render_to_buffer(w, h, |frame, _area| super::render(frame, app))
}

/// Draw the whole window for `app` as plain text.
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    buffer_to_string(&render_app_buffer(app, w, h))
}
