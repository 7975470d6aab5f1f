//! Replace-by-id list transformations.
//!
//! The todo list is owned by the page; items never touch it directly. They
//! hand back a [`ListUpdate`] and the owner folds it into whatever the list
//! looks like at that moment.

use crate::models::{Todo, TodoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    /// Swap the entry with the same id for this record.
    Replace(Todo),
    /// Drop the entry with this id.
    Remove(TodoId),
    /// Add a freshly created record at the end.
    Append(Todo),
    /// Take a full list from the service.
    Reset(Vec<Todo>),
}

impl ListUpdate {
    pub fn apply(self, todos: &[Todo]) -> Vec<Todo> {
        match self {
            Self::Replace(updated) => replace_by_id(todos, updated),
            Self::Remove(id) => remove_by_id(todos, id),
            Self::Append(created) => {
                let mut next = todos.to_vec();
                next.push(created);
                next
            }
            Self::Reset(todos) => todos,
        }
    }
}

pub fn replace_by_id(todos: &[Todo], updated: Todo) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == updated.id {
                updated.clone()
            } else {
                todo.clone()
            }
        })
        .collect()
}

pub fn remove_by_id(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::new(1, "a", false),
            Todo::new(2, "b", true),
            Todo::new(3, "c", false),
        ]
    }

    #[test]
    fn test_replace_keeps_length_and_order() {
        let todos = sample();
        let updated = Todo::new(2, "b2", false);

        let next = ListUpdate::Replace(updated.clone()).apply(&todos);

        assert_eq!(next.len(), todos.len());
        assert_eq!(next[0], todos[0]);
        assert_eq!(next[1], updated);
        assert_eq!(next[2], todos[2]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let todos = sample();
        let next = ListUpdate::Replace(Todo::new(9, "x", true)).apply(&todos);
        assert_eq!(next, todos);
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let todos = sample();
        let next = ListUpdate::Remove(2).apply(&todos);

        assert_eq!(next.len(), todos.len() - 1);
        assert_eq!(next, vec![todos[0].clone(), todos[2].clone()]);
    }

    #[test]
    fn test_remove_only_item_empties_list() {
        let todos = vec![Todo::new(1, "a", false)];
        assert!(ListUpdate::Remove(1).apply(&todos).is_empty());
    }

    #[test]
    fn test_append_and_reset() {
        let todos = sample();
        let next = ListUpdate::Append(Todo::new(4, "d", false)).apply(&todos);
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].text, "d");

        let next = ListUpdate::Reset(vec![Todo::new(5, "e", true)]).apply(&next);
        assert_eq!(next, vec![Todo::new(5, "e", true)]);
    }

    #[test]
    fn test_input_list_untouched() {
        let todos = sample();
        let snapshot = todos.clone();
        let _ = ListUpdate::Remove(1).apply(&todos);
        let _ = ListUpdate::Replace(Todo::new(3, "z", true)).apply(&todos);
        assert_eq!(todos, snapshot);
    }
}
