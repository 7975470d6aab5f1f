use serde::{Deserialize, Serialize};

pub type TodoId = i64;

/// A single task as stored by the todo service.
///
/// The service names the text field `todo` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    #[serde(rename = "todo")]
    pub text: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            is_completed,
            user_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_names() {
        let json = r#"{"id":1,"todo":"buy milk","isCompleted":false,"userId":3}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "buy milk");
        assert!(!todo.is_completed);
        assert_eq!(todo.user_id, Some(3));
    }

    #[test]
    fn test_todo_without_owner() {
        let todo = Todo::new(2, "walk", true);
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":2,"todo":"walk","isCompleted":true}"#);
    }
}
