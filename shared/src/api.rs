use serde::{Deserialize, Serialize};

// ============================================================================
// Todo API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub todo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub todo: String,
    pub is_completed: bool,
}

// ============================================================================
// Error Types
// ============================================================================

/// The service reports validation failures as a list of messages and
/// everything else as a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn joined(&self) -> String {
        match self {
            Self::Single(msg) => msg.clone(),
            Self::Many(msgs) => msgs.join(", "),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: ErrorMessage,
    pub error: Option<String>,
}
