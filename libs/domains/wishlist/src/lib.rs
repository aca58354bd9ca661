//! Wishlist Domain
//!
//! Listings saved for later by buyers. One flat collection; an item can be
//! wishlisted once across all users, a quirk the storefront relies on for
//! its duplicate message.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;

// Re-export commonly used types
pub use error::{WishlistError, WishlistResult};
pub use handlers::ApiDoc;
pub use models::{AddWishlistItem, RemoveWishlistItem, WishlistItem};
pub use mongodb::MongoWishlistRepository;
pub use repository::WishlistRepository;
