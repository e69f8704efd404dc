use std::collections::BTreeSet;

use crate::model::task::{Task, TaskList};

/// Error type for task list operations.
///
/// The `Display` text of `Empty` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Task cannot be empty.")]
    Empty,
    #[error("task index out of range: {0}")]
    IndexOutOfRange(usize),
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Append a new open task built from `text`. Returns its index.
///
/// Leading and trailing whitespace is trimmed; nothing is stored if the
/// trimmed text is empty.
pub fn add_task(list: &mut TaskList, text: &str) -> Result<usize, TaskError> {
    let description = text.trim();
    if description.is_empty() {
        return Err(TaskError::Empty);
    }
    let tasks = list.tasks_mut();
    tasks.push(Task::new(description));
    Ok(tasks.len() - 1)
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Flip the completion flag of the task at `index`. Returns the new value.
pub fn toggle_task(list: &mut TaskList, index: usize) -> Result<bool, TaskError> {
    let task = list
        .tasks_mut()
        .get_mut(index)
        .ok_or(TaskError::IndexOutOfRange(index))?;
    task.completed = !task.completed;
    Ok(task.completed)
}

// ---------------------------------------------------------------------------
// Removal
// ---------------------------------------------------------------------------

/// Remove the tasks at the given positions.
///
/// Positions are removed from the highest down so that earlier removals
/// never shift a later target. Out-of-range positions are skipped. Returns
/// the positions actually removed, ascending.
pub fn remove_tasks(list: &mut TaskList, indices: &BTreeSet<usize>) -> Vec<usize> {
    let tasks = list.tasks_mut();
    let mut removed = Vec::with_capacity(indices.len());
    for &index in indices.iter().rev() {
        if index < tasks.len() {
            tasks.remove(index);
            removed.push(index);
        }
    }
    removed.reverse();
    removed
}

/// Remove every completed task, keeping survivors in order.
/// Returns the original positions of the removed tasks, ascending.
pub fn remove_completed(list: &mut TaskList) -> Vec<usize> {
    let removed: BTreeSet<usize> = list
        .iter()
        .enumerate()
        .filter(|(_, t)| t.completed)
        .map(|(i, _)| i)
        .collect();
    if removed.is_empty() {
        return Vec::new();
    }
    let tasks = list.tasks_mut();
    let mut position = 0;
    tasks.retain(|_| {
        let keep = !removed.contains(&position);
        position += 1;
        keep
    });
    removed.into_iter().collect()
}
