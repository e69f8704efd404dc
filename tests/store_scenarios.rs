//! Store scenarios driven through the public library API.
//!
//! Each test builds a fresh `TaskList` and walks it through the same
//! operations the window's buttons perform.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use tasklist::model::TaskList;
use tasklist::ops::task_ops::{TaskError, add_task, remove_completed, remove_tasks, toggle_task};

/// (description, completed) pairs in list order
fn snapshot(list: &TaskList) -> Vec<(String, bool)> {
    list.iter()
        .map(|t| (t.description.clone(), t.completed))
        .collect()
}

fn owned(rows: &[(&str, bool)]) -> Vec<(String, bool)> {
    rows.iter().map(|(d, c)| (d.to_string(), *c)).collect()
}

#[test]
fn add_toggle_clear() {
    let mut list = TaskList::new();
    assert_eq!(add_task(&mut list, "Buy milk"), Ok(0));
    assert_eq!(add_task(&mut list, "  Walk dog  "), Ok(1));
    assert_eq!(add_task(&mut list, "Write report"), Ok(2));

    assert_eq!(toggle_task(&mut list, 1), Ok(true));
    assert_eq!(
        snapshot(&list),
        owned(&[
            ("Buy milk", false),
            ("Walk dog", true),
            ("Write report", false),
        ])
    );

    assert_eq!(remove_completed(&mut list), vec![1]);
    assert_eq!(
        snapshot(&list),
        owned(&[("Buy milk", false), ("Write report", false)])
    );
}

#[test]
fn blank_input_is_rejected() {
    let mut list = TaskList::new();
    let err = add_task(&mut list, " \t ").unwrap_err();
    assert_eq!(err, TaskError::Empty);
    assert_eq!(err.to_string(), "Task cannot be empty.");
    assert!(list.is_empty());
}

#[test]
fn delete_multiple_then_clear() {
    let mut list = TaskList::new();
    for name in ["a", "b", "c", "d", "e"] {
        add_task(&mut list, name).unwrap();
    }
    toggle_task(&mut list, 4).unwrap();

    let selection: BTreeSet<usize> = [0, 2].into_iter().collect();
    assert_eq!(remove_tasks(&mut list, &selection), vec![0, 2]);
    assert_eq!(
        snapshot(&list),
        owned(&[("b", false), ("d", false), ("e", true)])
    );

    assert_eq!(remove_completed(&mut list), vec![2]);
    assert_eq!(snapshot(&list), owned(&[("b", false), ("d", false)]));
}

#[test]
fn toggle_twice_restores() {
    let mut list = TaskList::new();
    add_task(&mut list, "Buy milk").unwrap();
    let before = list.clone();
    toggle_task(&mut list, 0).unwrap();
    toggle_task(&mut list, 0).unwrap();
    assert_eq!(list, before);
}

#[test]
fn clear_with_nothing_completed_is_a_no_op() {
    let mut list = TaskList::new();
    add_task(&mut list, "one").unwrap();
    add_task(&mut list, "two").unwrap();
    let before = list.clone();
    assert!(remove_completed(&mut list).is_empty());
    assert_eq!(list, before);
    assert_eq!(list.completed_count(), 0);
}
