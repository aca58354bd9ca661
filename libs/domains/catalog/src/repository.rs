use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::Item;

/// Listing data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: Item) -> ItemResult<Item>;

    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Listings put up by one seller, in `position` order.
    async fn list_by_seller(&self, seller_id: Uuid) -> ItemResult<Vec<Item>>;

    /// Delete by id. Returns whether a document was removed.
    async fn delete(&self, id: Uuid) -> ItemResult<bool>;
}
