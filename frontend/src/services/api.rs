use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::{CreateTodoRequest, ErrorResponse, UpdateTodoRequest};
use shared::{ApiError, Todo, TodoClient, TodoId};

use crate::config::ApiConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    config: ApiConfig,
}

impl ApiService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn get_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .authorized(Request::get(&self.config.url("/todos")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    pub async fn create_todo(&self, text: &str) -> Result<Todo, ApiError> {
        let request = CreateTodoRequest {
            todo: text.to_string(),
        };

        let response = self
            .authorized(Request::post(&self.config.url("/todos")))
            .json(&request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.config.access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

impl TodoClient for ApiService {
    async fn update_todo(
        &self,
        id: TodoId,
        text: &str,
        is_completed: bool,
    ) -> Result<Todo, ApiError> {
        let request = UpdateTodoRequest {
            todo: text.to_string(),
            is_completed,
        };

        let response = self
            .authorized(Request::put(&self.config.url(&format!("/todos/{}", id))))
            .json(&request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let response = self
            .authorized(Request::delete(&self.config.url(&format!("/todos/{}", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    ApiError::Status {
        status,
        message: error_message(&body),
    }
}

/// Pulls the human readable part out of an error body, falling back to the
/// raw body when it is not the service's JSON shape.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.message.joined(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"statusCode":404,"message":"Todo not found","error":"Not Found"}"#;
        assert_eq!(error_message(body), "Todo not found");
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(error_message(" Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(""), "");
    }
}
