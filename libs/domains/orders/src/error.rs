use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Malformed body: {0}")]
    BadBody(String),
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Any failure while placing an order.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CreateOrderFailure(#[from] pub OrderError);

impl IntoResponse for CreateOrderFailure {
    fn into_response(self) -> Response {
        tracing::error!("Order create failed: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Failed to create order"})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_failure_maps_to_400() {
        let response =
            CreateOrderFailure(OrderError::Database("insert failed".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
