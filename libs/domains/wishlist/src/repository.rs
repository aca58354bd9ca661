use async_trait::async_trait;
use uuid::Uuid;

use crate::error::WishlistResult;
use crate::models::WishlistItem;

/// Wishlist data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// First entry for this listing, across all users.
    async fn find_by_item(&self, item_id: Uuid) -> WishlistResult<Option<WishlistItem>>;

    async fn create(&self, entry: WishlistItem) -> WishlistResult<WishlistItem>;

    async fn list(&self) -> WishlistResult<Vec<WishlistItem>>;

    async fn list_by_user(&self, user_id: Uuid) -> WishlistResult<Vec<WishlistItem>>;

    /// Remove the first entry for this listing. Returns whether one existed.
    async fn remove_by_item(&self, item_id: Uuid) -> WishlistResult<bool>;
}
