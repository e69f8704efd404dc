use tracing::{debug, info};

use crate::ops::task_ops;
use crate::tui::app::{App, Focus, NO_SELECTION_WARNING};

/// Add the text field contents as a new task.
/// Clears the field on success, warns on blank input.
pub(super) fn add_task_action(app: &mut App) {
    match task_ops::add_task(&mut app.tasks, app.input.text()) {
        Ok(index) => {
            info!(index, "task added");
            app.input.clear();
            app.rows.invalidate_all();
        }
        Err(e) => app.show_warning(e.to_string()),
    }
}

/// Remove every selected task, or warn when nothing is selected.
pub(super) fn delete_selected_action(app: &mut App) {
    if app.list.selection.is_empty() {
        app.show_warning(NO_SELECTION_WARNING);
        return;
    }
    let selection = std::mem::take(&mut app.list.selection);
    let removed = task_ops::remove_tasks(&mut app.tasks, &selection);
    info!(count = removed.len(), "deleted selected tasks");
    app.list.apply_removal(&removed, app.tasks.len());
    app.rows.invalidate_all();
}

pub(super) fn clear_completed_action(app: &mut App) {
    if app.tasks.completed_count() == 0 {
        debug!("nothing to clear");
        return;
    }
    let removed = task_ops::remove_completed(&mut app.tasks);
    info!(count = removed.len(), "cleared completed tasks");
    app.list.apply_removal(&removed, app.tasks.len());
    app.rows.invalidate_all();
}

/// Flip completion of one row; only that row is re-rendered.
pub(super) fn toggle_row_action(app: &mut App, index: usize) {
    match task_ops::toggle_task(&mut app.tasks, index) {
        Ok(completed) => {
            debug!(index, completed, "toggled task");
            app.rows.invalidate_row(index);
        }
        Err(e) => debug!(error = %e, "ignoring toggle"),
    }
}

/// Run whatever the focused button does. No-op for non-buttons.
pub(super) fn activate_focused(app: &mut App) {
    match app.focus {
        Focus::AddButton => add_task_action(app),
        Focus::DeleteButton => delete_selected_action(app),
        Focus::ClearButton => clear_completed_action(app),
        Focus::TextField | Focus::List => {}
    }
}
