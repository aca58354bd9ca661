use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for AccountError {
    fn from(err: mongodb::error::Error) -> Self {
        AccountError::Database(err.to_string())
    }
}

pub type AccountResult<T> = Result<T, AccountError>;

/// Store failure during login. The storefront expects a bare string body,
/// not the structured error shape.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct LoginFailure(#[from] pub AccountError);

impl IntoResponse for LoginFailure {
    fn into_response(self) -> Response {
        tracing::error!("Login failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Json("Server error")).into_response()
    }
}

/// Store failure during signup.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SignupFailure(#[from] pub AccountError);

impl IntoResponse for SignupFailure {
    fn into_response(self) -> Response {
        tracing::error!("Signup failed: {}", self.0);
        (StatusCode::BAD_REQUEST, Json("Failed to create account")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_maps_to_500() {
        let response = LoginFailure(AccountError::Database("down".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_signup_failure_maps_to_400() {
        let response = SignupFailure(AccountError::Database("down".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
