//! API routes module
//!
//! Wires the domain routers, the liveness root, the readiness probe and
//! static serving of uploaded cover images into one router. All legacy
//! paths are flat at the root, matching what the storefront calls.

pub mod accounts;
pub mod catalog;
pub mod health;
pub mod orders;
pub mod wishlist;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(accounts::router(state))
        .merge(catalog::router(state))
        .merge(orders::router(state))
        .merge(wishlist::router(state))
        .merge(health::router(state.clone()))
        .nest_service("/uploads", ServeDir::new(state.files.root()))
}

/// Liveness string for the root path.
async fn root() -> &'static str {
    "Bookstore API is running"
}
