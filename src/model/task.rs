use std::slice;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Display text, already trimmed and never empty
    pub description: String,
    /// Checkbox state; the only field that changes after creation
    pub completed: bool,
}

impl Task {
    /// Create an open task. Callers are expected to pass trimmed, non-empty text;
    /// `ops::task_ops::add_task` is the validating entry point.
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            completed: false,
        }
    }
}

/// The ordered task sequence owned by the window.
///
/// Insertion order is display order. Duplicates are allowed. The list offers
/// read access here; all mutation goes through `ops::task_ops`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of tasks currently checked off
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_open() {
        let task = Task::new("Buy milk");
        assert_eq!(task.description, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn empty_list_accessors() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.get(0).is_none());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn completed_count_tracks_flags() {
        let mut list = TaskList::new();
        list.tasks_mut().push(Task::new("a"));
        list.tasks_mut().push(Task {
            description: "b".into(),
            completed: true,
        });
        assert_eq!(list.completed_count(), 1);
        let descriptions: Vec<&str> = (&list).into_iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["a", "b"]);
    }
}
