use std::rc::Rc;

use shared::{ListUpdate, Todo};
use yew::prelude::*;

/// The page-owned todo list. Rows change it only by dispatching a
/// [`ListUpdate`], which is folded into the current list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TodoStore {
    pub todos: Vec<Todo>,
}

impl Reducible for TodoStore {
    type Action = ListUpdate;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            todos: action.apply(&self.todos),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_fold_into_latest_list() {
        let store = Rc::new(TodoStore::default())
            .reduce(ListUpdate::Reset(vec![
                Todo::new(1, "a", false),
                Todo::new(2, "b", false),
            ]))
            .reduce(ListUpdate::Replace(Todo::new(1, "a", true)))
            .reduce(ListUpdate::Remove(2))
            .reduce(ListUpdate::Append(Todo::new(3, "c", false)));

        assert_eq!(
            store.todos,
            vec![Todo::new(1, "a", true), Todo::new(3, "c", false)]
        );
    }
}
