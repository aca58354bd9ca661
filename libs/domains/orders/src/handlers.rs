use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use axum_helpers::{AppError, UuidPath};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{CreateOrderFailure, OrderError};
use crate::models::{CreateOrder, Order};
use crate::repository::OrderRepository;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_order,
        list_orders,
        list_buyer_orders,
        list_seller_orders,
        delete_order,
    ),
    components(schemas(Order, CreateOrder)),
    tags(
        (name = "Orders", description = "Purchase order endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints.
pub fn router<R: OrderRepository + 'static>(repository: Arc<R>) -> Router {
    Router::new()
        .route("/userorder", post(create_order::<R>))
        .route("/orders", get(list_orders::<R>))
        .route("/getorders/{userId}", get(list_buyer_orders::<R>))
        .route("/getsellerorders/{userId}", get(list_seller_orders::<R>))
        .route("/userorderdelete/{id}", delete(delete_order::<R>))
        .with_state(repository)
}

/// Place an order
#[utoipa::path(
    post,
    path = "/userorder",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Malformed body or store failure")
    )
)]
async fn create_order<R: OrderRepository>(
    State(repository): State<Arc<R>>,
    body: Result<Json<CreateOrder>, JsonRejection>,
) -> Result<Response, CreateOrderFailure> {
    // A body the storefront got wrong gets the same sentinel shape as a
    // store failure.
    let Json(input) = body.map_err(|e| OrderError::BadBody(e.body_text()))?;
    let order = repository.create(Order::new(input)).await?;

    Ok((StatusCode::CREATED, Json(order)).into_response())
}

/// List all orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>),
        (status = 500, description = "Store failure")
    )
)]
async fn list_orders<R: OrderRepository>(
    State(repository): State<Arc<R>>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = repository
        .list()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(orders))
}

/// List one buyer's orders
#[utoipa::path(
    get,
    path = "/getorders/{userId}",
    tag = "Orders",
    params(
        ("userId" = Uuid, Path, description = "Buyer account ID")
    ),
    responses(
        (status = 200, description = "Orders placed by the buyer", body = Vec<Order>),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_buyer_orders<R: OrderRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(buyer_id): UuidPath,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = repository
        .list_by_buyer(buyer_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(orders))
}

/// List one seller's incoming orders
#[utoipa::path(
    get,
    path = "/getsellerorders/{userId}",
    tag = "Orders",
    params(
        ("userId" = Uuid, Path, description = "Seller account ID")
    ),
    responses(
        (status = 200, description = "Orders received by the seller", body = Vec<Order>),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_seller_orders<R: OrderRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(seller_id): UuidPath,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = repository
        .list_by_seller(seller_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(orders))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/userorderdelete/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Delete result, whether or not the order existed"),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_order<R: OrderRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    let deleted = repository
        .delete(id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let body = serde_json::json!({
        "acknowledged": true,
        "deletedCount": if deleted { 1 } else { 0 },
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockOrderRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn checkout_body(seller_id: Uuid, user_id: Uuid) -> Value {
        json!({
            "flatno": "12B",
            "city": "Pune",
            "state": "MH",
            "pincode": "411001",
            "totalamount": "499",
            "seller": "Book Seller",
            "sellerId": seller_id,
            "BookingDate": "2024-08-01",
            "description": "Leave at door",
            "Delivery": "2024-08-05",
            "userId": user_id,
            "userName": "Buyer",
            "booktitle": "Dune",
            "bookauthor": "Frank Herbert",
            "bookgenre": "Sci-Fi"
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_order_returns_201_with_document() {
        let mut repo = MockOrderRepository::new();
        repo.expect_create().returning(|order| Ok(order));

        let app = router(Arc::new(repo));
        let seller_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let response = app
            .oneshot(post_json("/userorder", checkout_body(seller_id, user_id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["totalamount"], "499");
        assert_eq!(body["sellerId"], seller_id.to_string());
        assert_eq!(body["BookingDate"], "2024-08-01");
        assert!(body.get("_id").is_some());
    }

    #[tokio::test]
    async fn test_create_order_store_failure_returns_400_error_body() {
        let mut repo = MockOrderRepository::new();
        repo.expect_create()
            .returning(|_| Err(OrderError::Database("insert failed".into())));

        let app = router(Arc::new(repo));

        let response = app
            .oneshot(post_json(
                "/userorder",
                checkout_body(Uuid::new_v4(), Uuid::new_v4()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Failed to create order"})
        );
    }

    #[tokio::test]
    async fn test_create_order_malformed_body_returns_400_error_body() {
        let mut repo = MockOrderRepository::new();
        repo.expect_create().times(0);

        let app = router(Arc::new(repo));

        let response = app
            .oneshot(post_json("/userorder", json!({"flatno": "12B"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Failed to create order"})
        );
    }

    #[tokio::test]
    async fn test_buyer_orders_filter_by_buyer_id() {
        let buyer = Uuid::new_v4();

        let mut repo = MockOrderRepository::new();
        repo.expect_list_by_buyer()
            .withf(move |id| *id == buyer)
            .returning(|_| Ok(vec![]));

        let app = router(Arc::new(repo));
        let request = Request::builder()
            .method("GET")
            .uri(format!("/getorders/{buyer}"))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_seller_orders_filter_by_seller_id() {
        let seller = Uuid::new_v4();

        let mut repo = MockOrderRepository::new();
        repo.expect_list_by_seller()
            .withf(move |id| *id == seller)
            .returning(|_| Ok(vec![]));

        let app = router(Arc::new(repo));
        let request = Request::builder()
            .method("GET")
            .uri(format!("/getsellerorders/{seller}"))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_orders_store_failure_returns_500() {
        let mut repo = MockOrderRepository::new();
        repo.expect_list()
            .returning(|| Err(OrderError::Database("cursor died".into())));

        let app = router(Arc::new(repo));
        let request = Request::builder()
            .method("GET")
            .uri("/orders")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_order_still_returns_200() {
        let mut repo = MockOrderRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let app = router(Arc::new(repo));
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/userorderdelete/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["deletedCount"], 0);
    }
}
