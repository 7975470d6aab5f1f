use crate::error::ApiError;
use crate::item::Command;
use crate::models::{Todo, TodoId};
use crate::reconcile::ListUpdate;

/// Remote operations a todo row needs from the service.
///
/// The browser is single threaded, so implementations are not required to
/// produce `Send` futures.
#[allow(async_fn_in_trait)]
pub trait TodoClient {
    /// Stores `text` and `is_completed` for `id` and returns the stored record.
    async fn update_todo(
        &self,
        id: TodoId,
        text: &str,
        is_completed: bool,
    ) -> Result<Todo, ApiError>;

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError>;
}

/// Sends `command` to the service and returns the list update to apply.
pub async fn execute<C: TodoClient>(client: &C, command: &Command) -> Result<ListUpdate, ApiError> {
    match command {
        Command::Update {
            id,
            text,
            is_completed,
            origin,
        } => {
            tracing::debug!(id, ?origin, is_completed, "Updating todo");
            let stored = client.update_todo(*id, text, *is_completed).await?;
            tracing::info!(id, "Todo updated");
            Ok(ListUpdate::Replace(stored))
        }
        Command::Delete { id } => {
            tracing::debug!(id, "Deleting todo");
            client.delete_todo(*id).await?;
            tracing::info!(id, "Todo deleted");
            Ok(ListUpdate::Remove(*id))
        }
    }
}
