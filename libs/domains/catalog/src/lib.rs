//! Catalog Domain
//!
//! Book listings put up for sale by sellers. Creation arrives as multipart
//! form data with an optional cover image; the image is written to the
//! shared file store and its public path recorded on the document.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::{ApiDoc, CatalogState};
pub use models::{CreateItem, Item};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
