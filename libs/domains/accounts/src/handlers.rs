use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use axum_helpers::{AppError, UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{LoginFailure, SignupFailure};
use crate::models::{Account, AccountSummary, Credentials, LoginResponse, Role, Signup};
use crate::repository::AccountRepository;

/// OpenAPI documentation for the Accounts API
#[derive(OpenApi)]
#[openapi(
    paths(
        admin_login,
        admin_signup,
        seller_login,
        seller_signup,
        buyer_login,
        buyer_signup,
        list_buyers,
        list_sellers,
        delete_buyer,
        delete_seller,
    ),
    components(schemas(Account, AccountSummary, Credentials, LoginResponse, Signup)),
    tags(
        (name = "Accounts", description = "Admin, seller and buyer account endpoints")
    )
)]
pub struct ApiDoc;

/// Create the accounts router with all HTTP endpoints.
///
/// Paths are the flat legacy routes the storefront calls; they are mounted
/// at the application root, not under an `/api` prefix.
pub fn router<R: AccountRepository + 'static>(repository: Arc<R>) -> Router {
    Router::new()
        .route("/alogin", post(admin_login::<R>))
        .route("/asignup", post(admin_signup::<R>))
        .route("/slogin", post(seller_login::<R>))
        .route("/ssignup", post(seller_signup::<R>))
        .route("/login", post(buyer_login::<R>))
        .route("/signup", post(buyer_signup::<R>))
        .route("/users", get(list_buyers::<R>))
        .route("/sellers", get(list_sellers::<R>))
        .route("/userdelete/{id}", delete(delete_buyer::<R>))
        .route("/sellerdelete/{id}", delete(delete_seller::<R>))
        .with_state(repository)
}

/// Shared login flow.
///
/// Failure outcomes are 200 responses whose bodies are the exact strings
/// the storefront branches on; only a store failure becomes a 500.
async fn login<R: AccountRepository>(
    repository: &R,
    role: Role,
    credentials: Credentials,
) -> Result<Response, LoginFailure> {
    let Some(account) = repository.find_by_email(role, &credentials.email).await? else {
        return Ok(Json(role.unknown_email_reply()).into_response());
    };

    if account.password != credentials.password {
        return Ok(Json(role.bad_password_reply()).into_response());
    }

    Ok(Json(LoginResponse::success(&account)).into_response())
}

/// Shared signup flow. Duplicate email is a 200 with a sentinel body.
async fn signup<R: AccountRepository>(
    repository: &R,
    role: Role,
    input: Signup,
) -> Result<Response, SignupFailure> {
    if repository.find_by_email(role, &input.email).await?.is_some() {
        return Ok(Json("Already have an account").into_response());
    }

    repository.create(role, Account::new(input)).await?;
    Ok(Json("Account Created").into_response())
}

async fn delete_account<R: AccountRepository>(
    repository: &R,
    role: Role,
    id: Uuid,
) -> Result<Response, AppError> {
    let deleted = repository
        .delete(role, id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    // 200 either way, mirroring a raw deleteOne result.
    let body = serde_json::json!({
        "acknowledged": true,
        "deletedCount": if deleted { 1 } else { 0 },
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Admin login
#[utoipa::path(
    post,
    path = "/alogin",
    tag = "Accounts",
    request_body = Credentials,
    responses(
        (status = 200, description = "Success shape or a sentinel string body", body = LoginResponse),
        (status = 500, description = "Store failure")
    )
)]
async fn admin_login<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<Response, LoginFailure> {
    login(repository.as_ref(), Role::Admin, credentials).await
}

/// Admin signup
#[utoipa::path(
    post,
    path = "/asignup",
    tag = "Accounts",
    request_body = Signup,
    responses(
        (status = 200, description = "Created, or duplicate-email sentinel"),
        (status = 400, description = "Store failure")
    )
)]
async fn admin_signup<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(input): ValidatedJson<Signup>,
) -> Result<Response, SignupFailure> {
    signup(repository.as_ref(), Role::Admin, input).await
}

/// Seller login
#[utoipa::path(
    post,
    path = "/slogin",
    tag = "Accounts",
    request_body = Credentials,
    responses(
        (status = 200, description = "Success shape or a sentinel string body", body = LoginResponse),
        (status = 500, description = "Store failure")
    )
)]
async fn seller_login<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<Response, LoginFailure> {
    login(repository.as_ref(), Role::Seller, credentials).await
}

/// Seller signup
#[utoipa::path(
    post,
    path = "/ssignup",
    tag = "Accounts",
    request_body = Signup,
    responses(
        (status = 200, description = "Created, or duplicate-email sentinel"),
        (status = 400, description = "Store failure")
    )
)]
async fn seller_signup<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(input): ValidatedJson<Signup>,
) -> Result<Response, SignupFailure> {
    signup(repository.as_ref(), Role::Seller, input).await
}

/// Buyer login
#[utoipa::path(
    post,
    path = "/login",
    tag = "Accounts",
    request_body = Credentials,
    responses(
        (status = 200, description = "Success shape or a sentinel string body", body = LoginResponse),
        (status = 500, description = "Store failure")
    )
)]
async fn buyer_login<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<Response, LoginFailure> {
    login(repository.as_ref(), Role::Buyer, credentials).await
}

/// Buyer signup
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Accounts",
    request_body = Signup,
    responses(
        (status = 200, description = "Created, or duplicate-email sentinel"),
        (status = 400, description = "Store failure")
    )
)]
async fn buyer_signup<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    ValidatedJson(input): ValidatedJson<Signup>,
) -> Result<Response, SignupFailure> {
    signup(repository.as_ref(), Role::Buyer, input).await
}

/// List buyer accounts
#[utoipa::path(
    get,
    path = "/users",
    tag = "Accounts",
    responses(
        (status = 200, description = "All buyer accounts", body = Vec<Account>),
        (status = 500, description = "Store failure")
    )
)]
async fn list_buyers<R: AccountRepository>(
    State(repository): State<Arc<R>>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = repository
        .list(Role::Buyer)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(accounts))
}

/// List seller accounts
#[utoipa::path(
    get,
    path = "/sellers",
    tag = "Accounts",
    responses(
        (status = 200, description = "All seller accounts", body = Vec<Account>),
        (status = 500, description = "Store failure")
    )
)]
async fn list_sellers<R: AccountRepository>(
    State(repository): State<Arc<R>>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = repository
        .list(Role::Seller)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(accounts))
}

/// Delete a buyer account
#[utoipa::path(
    delete,
    path = "/userdelete/{id}",
    tag = "Accounts",
    params(
        ("id" = Uuid, Path, description = "Buyer account ID")
    ),
    responses(
        (status = 200, description = "Delete result, whether or not the account existed"),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_buyer<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    delete_account(repository.as_ref(), Role::Buyer, id).await
}

/// Delete a seller account
#[utoipa::path(
    delete,
    path = "/sellerdelete/{id}",
    tag = "Accounts",
    params(
        ("id" = Uuid, Path, description = "Seller account ID")
    ),
    responses(
        (status = 200, description = "Delete result, whether or not the account existed"),
        (status = 400, description = "Malformed ID"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_seller<R: AccountRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    delete_account(repository.as_ref(), Role::Seller, id).await
}
