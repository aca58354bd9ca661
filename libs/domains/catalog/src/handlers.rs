use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use axum_helpers::{AppError, UuidPath};
use file_store::FileStore;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{CreateItemFailure, ItemError, ItemResult};
use crate::models::{CreateItem, Item};
use crate::repository::ItemRepository;

/// Uploaded covers are small; this bound just keeps the body reader honest.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_item,
        list_items,
        get_item,
        list_seller_items,
        delete_item,
        delete_seller_item,
    ),
    components(schemas(Item)),
    tags(
        (name = "Catalog", description = "Book listing endpoints")
    )
)]
pub struct ApiDoc;

/// Handler state: listing storage plus the blob store for cover images.
pub struct CatalogState<R> {
    pub repository: Arc<R>,
    pub files: Arc<dyn FileStore>,
}

impl<R> Clone for CatalogState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            files: self.files.clone(),
        }
    }
}

/// Create the catalog router with all HTTP endpoints.
pub fn router<R: ItemRepository + 'static>(
    repository: Arc<R>,
    files: Arc<dyn FileStore>,
) -> Router {
    let state = CatalogState { repository, files };

    Router::new()
        .route("/items", post(create_item::<R>))
        .route("/item", get(list_items::<R>))
        .route("/item/{id}", get(get_item::<R>))
        .route("/getitem/{userId}", get(list_seller_items::<R>))
        .route("/itemdelete/{id}", delete(delete_item::<R>))
        .route("/useritemdelete/{id}", delete(delete_seller_item::<R>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

fn required(value: Option<String>, name: &str) -> ItemResult<String> {
    value.ok_or_else(|| ItemError::BadForm(format!("missing field: {name}")))
}

/// Assemble a [`CreateItem`] from the multipart form, storing the cover
/// image (when present) before touching the database.
async fn parse_create_form(
    mut multipart: Multipart,
    files: &dyn FileStore,
) -> ItemResult<CreateItem> {
    let mut item_image = None;
    let mut title = None;
    let mut author = None;
    let mut genre = None;
    let mut description = None;
    let mut price = None;
    let mut user_id = None;
    let mut user_name = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ItemError::BadForm(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "itemImage" {
            let original = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ItemError::BadForm(e.to_string()))?;
            item_image = Some(files.save(&original, &bytes).await?);
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ItemError::BadForm(e.to_string()))?;

        match name.as_str() {
            "title" => title = Some(value),
            "author" => author = Some(value),
            "genre" => genre = Some(value),
            "description" => description = Some(value),
            "price" => price = Some(value),
            "userId" => {
                let id = value
                    .parse::<Uuid>()
                    .map_err(|e| ItemError::BadForm(format!("userId: {e}")))?;
                user_id = Some(id);
            }
            "userName" => user_name = Some(value),
            // Unknown fields are dropped, matching a lax form parser.
            _ => {}
        }
    }

    Ok(CreateItem {
        item_image,
        title: required(title, "title")?,
        author: required(author, "author")?,
        genre: required(genre, "genre")?,
        description: required(description, "description")?,
        price: required(price, "price")?,
        user_id: user_id.ok_or_else(|| ItemError::BadForm("missing field: userId".into()))?,
        user_name: required(user_name, "userName")?,
    })
}

/// Create a listing from a multipart form
#[utoipa::path(
    post,
    path = "/items",
    tag = "Catalog",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Listing created", body = Item),
        (status = 400, description = "Malformed form or store failure")
    )
)]
async fn create_item<R: ItemRepository>(
    State(state): State<CatalogState<R>>,
    multipart: Multipart,
) -> Result<Response, CreateItemFailure> {
    let input = parse_create_form(multipart, state.files.as_ref()).await?;
    let item = state.repository.create(Item::new(input)).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// List all book listings
#[utoipa::path(
    get,
    path = "/item",
    tag = "Catalog",
    responses(
        (status = 200, description = "All listings", body = Vec<Item>),
        (status = 500, description = "Store failure")
    )
)]
async fn list_items<R: ItemRepository>(
    State(state): State<CatalogState<R>>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state
        .repository
        .list()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(items))
}

/// Get one listing by ID
#[utoipa::path(
    get,
    path = "/item/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "The listing, or null when absent", body = Option<Item>),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn get_item<R: ItemRepository>(
    State(state): State<CatalogState<R>>,
    UuidPath(id): UuidPath,
) -> Result<Json<Option<Item>>, AppError> {
    // Absent is 200 + null, not 404; the storefront renders the null itself.
    let item = state
        .repository
        .get_by_id(id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(item))
}

/// List one seller's listings
#[utoipa::path(
    get,
    path = "/getitem/{userId}",
    tag = "Catalog",
    params(
        ("userId" = Uuid, Path, description = "Seller account ID")
    ),
    responses(
        (status = 200, description = "Listings owned by the seller", body = Vec<Item>),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_seller_items<R: ItemRepository>(
    State(state): State<CatalogState<R>>,
    UuidPath(seller_id): UuidPath,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state
        .repository
        .list_by_seller(seller_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(items))
}

async fn delete_listing<R: ItemRepository>(
    repository: &R,
    id: Uuid,
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

/// Delete a listing (admin side)
#[utoipa::path(
    delete,
    path = "/itemdelete/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Delete result, whether or not the listing existed"),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_item<R: ItemRepository>(
    State(state): State<CatalogState<R>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    delete_listing(state.repository.as_ref(), id).await
}

/// Delete a listing (seller side)
#[utoipa::path(
    delete,
    path = "/useritemdelete/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Delete result, whether or not the listing existed"),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_seller_item<R: ItemRepository>(
    State(state): State<CatalogState<R>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    delete_listing(state.repository.as_ref(), id).await
}
