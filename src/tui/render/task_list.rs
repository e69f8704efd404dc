use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Task;
use crate::tui::app::{App, Focus};
use crate::tui::layout::inner;
use crate::tui::theme::Theme;
use crate::util::unicode::truncate_to_width;

/// Cells taken by the lead marker in front of every row
const MARKER_WIDTH: u16 = 2;
/// "[ ] " / "[x] "
const CHECKBOX_WIDTH: u16 = 4;

/// Render the bordered task list. Rows come from the row cache, which is
/// brought up to date first.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::List && app.dialog.is_none();
    let bg = app.theme.background;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_color(focused)).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(block, area);

    let body = inner(area);
    if body.is_empty() {
        return;
    }

    let label_width = body.width.saturating_sub(MARKER_WIDTH + CHECKBOX_WIDTH);
    refresh_rows(app, label_width);

    let len = app.tasks.len();
    let height = body.height as usize;
    app.list.scroll_offset = app.list.scroll_offset.min(len.saturating_sub(height));
    let start = app.list.scroll_offset;
    let end = (start + height).min(len);

    let theme = &app.theme;
    for (line_idx, index) in (start..end).enumerate() {
        let lead = focused && index == app.list.cursor;
        let marker = if lead { "› " } else { "  " };
        let mut spans = vec![Span::styled(
            marker,
            Style::default().fg(theme.highlight),
        )];
        let selected = app.list.selection.contains(&index);
        // Completed rows keep their muted color when selected
        let recolor = selected && app.tasks.get(index).is_some_and(|t| !t.completed);
        spans.extend(app.rows.lines[index].spans.iter().cloned().map(|span| {
            if recolor {
                span.patch_style(Style::default().fg(theme.selection_fg))
            } else {
                span
            }
        }));

        let mut row_style = if selected {
            Style::default().bg(theme.selection_bg)
        } else {
            Style::default().bg(bg)
        };
        if lead {
            row_style = row_style.add_modifier(Modifier::BOLD);
        }
        let row_area = Rect::new(body.x, body.y + line_idx as u16, body.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(row_style), row_area);
    }
}

/// Rebuild stale rows. A full rebuild happens after structural changes or a
/// width change; otherwise only rows marked dirty are redrawn.
fn refresh_rows(app: &mut App, label_width: u16) {
    let len = app.tasks.len();
    if app.rows.needs_rebuild(label_width, len) {
        app.rows.lines = app
            .tasks
            .iter()
            .map(|task| task_line(task, label_width, &app.theme))
            .collect();
        app.rows.width = label_width;
        app.rows.stale = false;
        app.rows.dirty.clear();
        return;
    }
    for index in std::mem::take(&mut app.rows.dirty) {
        if let Some(task) = app.tasks.get(index) {
            app.rows.lines[index] = task_line(task, label_width, &app.theme);
        }
    }
}

/// Checkbox and label for one task, without the lead marker
fn task_line(task: &Task, label_width: u16, theme: &Theme) -> Line<'static> {
    let label = truncate_to_width(&task.description, label_width as usize);
    if task.completed {
        let style = Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
        Line::from(vec![
            Span::styled("[x] ", Style::default().fg(theme.dim)),
            Span::styled(label, style),
        ])
    } else {
        Line::from(vec![
            Span::styled("[ ] ", Style::default().fg(theme.text)),
            Span::styled(label, Style::default().fg(theme.text_bright)),
        ])
    }
}
