use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::{AppError, UuidPath};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::models::{AddWishlistItem, RemoveWishlistItem, WishlistItem};
use crate::repository::WishlistRepository;

/// OpenAPI documentation for the Wishlist API
#[derive(OpenApi)]
#[openapi(
    paths(add_entry, remove_entry, list_entries, list_user_entries),
    components(schemas(WishlistItem, AddWishlistItem, RemoveWishlistItem)),
    tags(
        (name = "Wishlist", description = "Saved-for-later endpoints")
    )
)]
pub struct ApiDoc;

/// Create the wishlist router with all HTTP endpoints.
pub fn router<R: WishlistRepository + 'static>(repository: Arc<R>) -> Router {
    Router::new()
        .route("/wishlist/add", post(add_entry::<R>))
        .route("/wishlist/remove", post(remove_entry::<R>))
        .route("/wishlist", get(list_entries::<R>))
        .route("/wishlist/{userId}", get(list_user_entries::<R>))
        .with_state(repository)
}

/// Add a listing to the wishlist
#[utoipa::path(
    post,
    path = "/wishlist/add",
    tag = "Wishlist",
    request_body = AddWishlistItem,
    responses(
        (status = 200, description = "Entry created", body = WishlistItem),
        (status = 400, description = "Listing already wishlisted"),
        (status = 500, description = "Store failure")
    )
)]
async fn add_entry<R: WishlistRepository>(
    State(repository): State<Arc<R>>,
    Json(input): Json<AddWishlistItem>,
) -> Result<Response, AppError> {
    // The duplicate check is on itemId alone, across all users.
    let existing = repository
        .find_by_item(input.item_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if existing.is_some() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"msg": "Item already in wishlist"})),
        )
            .into_response());
    }

    let entry = repository
        .create(WishlistItem::new(input))
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(entry).into_response())
}

/// Remove a listing from the wishlist
#[utoipa::path(
    post,
    path = "/wishlist/remove",
    tag = "Wishlist",
    request_body = RemoveWishlistItem,
    responses(
        (status = 200, description = "Removed, whether or not an entry existed"),
        (status = 500, description = "Store failure")
    )
)]
async fn remove_entry<R: WishlistRepository>(
    State(repository): State<Arc<R>>,
    Json(input): Json<RemoveWishlistItem>,
) -> Result<Response, AppError> {
    repository
        .remove_by_item(input.item_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    // 200 with the same body either way.
    Ok(Json(serde_json::json!({"msg": "Item removed from wishlist"})).into_response())
}

/// List all wishlist entries
#[utoipa::path(
    get,
    path = "/wishlist",
    tag = "Wishlist",
    responses(
        (status = 200, description = "All wishlist entries", body = Vec<WishlistItem>),
        (status = 500, description = "Store failure")
    )
)]
async fn list_entries<R: WishlistRepository>(
    State(repository): State<Arc<R>>,
) -> Result<Json<Vec<WishlistItem>>, AppError> {
    let entries = repository
        .list()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(entries))
}

/// List one buyer's wishlist
#[utoipa::path(
    get,
    path = "/wishlist/{userId}",
    tag = "Wishlist",
    params(
        ("userId" = Uuid, Path, description = "Buyer account ID")
    ),
    responses(
        (status = 200, description = "Entries saved by the buyer", body = Vec<WishlistItem>),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_user_entries<R: WishlistRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(user_id): UuidPath,
) -> Result<Json<Vec<WishlistItem>>, AppError> {
    let entries = repository
        .list_by_user(user_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WishlistError;
    use crate::repository::MockWishlistRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn add_body(item_id: Uuid) -> Value {
        json!({
            "itemId": item_id,
            "title": "Dune",
            "itemImage": "uploads/1-cover.png",
            "userId": Uuid::new_v4(),
            "userName": "Buyer"
        })
    }

    fn entry(item_id: Uuid) -> WishlistItem {
        WishlistItem::new(AddWishlistItem {
            item_id,
            title: "Dune".into(),
            item_image: None,
            user_id: Uuid::new_v4(),
            user_name: "Someone Else".into(),
        })
    }

    #[tokio::test]
    async fn test_add_new_item_returns_200_with_entry() {
        let item_id = Uuid::new_v4();

        let mut repo = MockWishlistRepository::new();
        repo.expect_find_by_item()
            .withf(move |id| *id == item_id)
            .returning(|_| Ok(None));
        repo.expect_create().returning(|entry| Ok(entry));

        let app = router(Arc::new(repo));
        let response = app
            .oneshot(post_json("/wishlist/add", add_body(item_id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["itemId"], item_id.to_string());
        assert_eq!(body["title"], "Dune");
    }

    #[tokio::test]
    async fn test_add_duplicate_item_any_user_returns_400_msg() {
        let item_id = Uuid::new_v4();

        // Wishlisted by a different user; the duplicate check still fires.
        let mut repo = MockWishlistRepository::new();
        repo.expect_find_by_item()
            .returning(move |_| Ok(Some(entry(item_id))));
        repo.expect_create().times(0);

        let app = router(Arc::new(repo));
        let response = app
            .oneshot(post_json("/wishlist/add", add_body(item_id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"msg": "Item already in wishlist"})
        );
    }

    #[tokio::test]
    async fn test_remove_returns_200_msg_even_when_absent() {
        let mut repo = MockWishlistRepository::new();
        repo.expect_remove_by_item().returning(|_| Ok(false));

        let app = router(Arc::new(repo));
        let response = app
            .oneshot(post_json(
                "/wishlist/remove",
                json!({"itemId": Uuid::new_v4()}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"msg": "Item removed from wishlist"})
        );
    }

    #[tokio::test]
    async fn test_list_user_entries_filters_by_user() {
        let user = Uuid::new_v4();

        let mut repo = MockWishlistRepository::new();
        repo.expect_list_by_user()
            .withf(move |id| *id == user)
            .returning(|_| Ok(vec![]));

        let app = router(Arc::new(repo));
        let request = Request::builder()
            .method("GET")
            .uri(format!("/wishlist/{user}"))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_add_store_failure_returns_500() {
        let mut repo = MockWishlistRepository::new();
        repo.expect_find_by_item()
            .returning(|_| Err(WishlistError::Database("connection reset".into())));

        let app = router(Arc::new(repo));
        let response = app
            .oneshot(post_json("/wishlist/add", add_body(Uuid::new_v4())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
