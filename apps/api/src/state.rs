//! Application state management.
//!
//! Shared state handed to the route builders: configuration, the MongoDB
//! client and database, and the file store for uploaded cover images.

use file_store::DiskFileStore;
use mongodb::{Client, Database};
use std::sync::Arc;

/// Shared application state.
///
/// Cloning is cheap; the client shares its underlying connection pool and
/// the file store is behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Blob store for uploaded cover images
    pub files: Arc<DiskFileStore>,
}
