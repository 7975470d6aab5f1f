use shared::ApiError;

use crate::config::ApiConfig;

/// Reports a failed service call to the user.
///
/// Every failure is treated alike; an expired session also drops the stored
/// token so the next request goes out unauthenticated.
pub fn handle_error(config: &ApiConfig, error: &ApiError) {
    tracing::error!("Todo request failed: {}", error);

    if error.is_unauthorized() {
        config.clear_access_token();
    }

    gloo::dialogs::alert(&error.user_message());
}
