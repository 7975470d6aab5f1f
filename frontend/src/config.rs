use gloo::storage::{LocalStorage, Storage};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Where the todo service lives and where the session token is kept.
///
/// Values are baked in at build time from `TODO_API_BASE_URL` and
/// `TODO_TOKEN_KEY`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::new(
            option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("TODO_TOKEN_KEY").unwrap_or(DEFAULT_TOKEN_KEY),
        )
    }

    pub fn new(base_url: &str, token_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_key: token_key.to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn access_token(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(&self.token_key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    pub fn clear_access_token(&self) {
        LocalStorage::delete(&self.token_key);
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/", "token");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.url("/todos/3"), "https://api.example.com/todos/3");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/todos"), "http://localhost:8000/todos");
        assert_eq!(config.token_key, "access_token");
    }
}
