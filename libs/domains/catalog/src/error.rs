use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Malformed form data: {0}")]
    BadForm(String),

    #[error("File store error: {0}")]
    FileStore(#[from] file_store::FileStoreError),
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Any failure while creating a listing. The storefront only checks for
/// this one body shape.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CreateItemFailure(#[from] pub ItemError);

impl IntoResponse for CreateItemFailure {
    fn into_response(self) -> Response {
        tracing::error!("Item create failed: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Failed to create item"})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_failure_maps_to_400_with_error_body() {
        let response =
            CreateItemFailure(ItemError::Database("insert failed".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
