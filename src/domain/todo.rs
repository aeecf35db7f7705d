use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TodoError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl Default for TodoId {
    fn default() -> Self { Self(Uuid::new_v4()) }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(TodoId).map_err(|_| TodoError::InvalidId)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub body: String,
}

/// An absent `body` decodes to `""` and is caught by the emptiness check;
/// a supplied `completed` is accepted but ignored (creation always starts
/// uncompleted).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub body: String,
}

/// Partial update: `None` leaves the stored field untouched, so
/// `{"completed": false}` and an absent `completed` stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub completed: Option<bool>,
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_defaults_missing_body_to_empty() {
        let input: CreateTodo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.body, "");
    }

    #[test]
    fn create_payload_ignores_supplied_completed() {
        let input: CreateTodo =
            serde_json::from_value(json!({ "completed": true, "body": "x" })).unwrap();
        assert_eq!(input.body, "x");
    }

    #[test]
    fn update_payload_distinguishes_absent_from_false() {
        let input: UpdateTodo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.completed, None);
        assert_eq!(input.body, None);

        let input: UpdateTodo = serde_json::from_value(json!({ "completed": false })).unwrap();
        assert_eq!(input.completed, Some(false));
        assert_eq!(input.body, None);

        let input: UpdateTodo = serde_json::from_value(json!({ "body": "" })).unwrap();
        assert_eq!(input.body, Some(String::new()));
    }

    #[test]
    fn todo_serializes_with_wire_field_names() {
        let todo = Todo { id: TodoId::default(), completed: false, body: "buy milk".into() };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["completed"], json!(false));
        assert_eq!(value["body"], json!("buy milk"));
        assert!(value["id"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn malformed_id_fails_to_parse() {
        assert!("not-a-uuid".parse::<TodoId>().is_err());
        assert!(TodoId::default().to_string().parse::<TodoId>().is_ok());
    }
}
