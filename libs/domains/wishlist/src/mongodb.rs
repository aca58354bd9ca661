//! MongoDB implementation of WishlistRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::WishlistResult;
use crate::models::WishlistItem;
use crate::repository::WishlistRepository;

/// MongoDB implementation of the WishlistRepository
pub struct MongoWishlistRepository {
    collection: Collection<WishlistItem>,
}

impl MongoWishlistRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<WishlistItem>("wishlist");
        Self { collection }
    }
}

#[async_trait]
impl WishlistRepository for MongoWishlistRepository {
    #[instrument(skip(self))]
    async fn find_by_item(&self, item_id: Uuid) -> WishlistResult<Option<WishlistItem>> {
        let filter = doc! { "itemId": to_bson(&item_id).unwrap_or(Bson::Null) };
        let entry = self.collection.find_one(filter).await?;
        Ok(entry)
    }

    #[instrument(skip(self, entry), fields(item_id = %entry.item_id))]
    async fn create(&self, entry: WishlistItem) -> WishlistResult<WishlistItem> {
        self.collection.insert_one(&entry).await?;

        tracing::info!(entry_id = %entry.id, "Wishlist entry created");
        Ok(entry)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> WishlistResult<Vec<WishlistItem>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let entries: Vec<WishlistItem> = cursor.try_collect().await?;

        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid) -> WishlistResult<Vec<WishlistItem>> {
        use futures_util::TryStreamExt;

        let filter = doc! { "userId": to_bson(&user_id).unwrap_or(Bson::Null) };
        let cursor = self.collection.find(filter).await?;
        let entries: Vec<WishlistItem> = cursor.try_collect().await?;

        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn remove_by_item(&self, item_id: Uuid) -> WishlistResult<bool> {
        let filter = doc! { "itemId": to_bson(&item_id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        tracing::info!(item_id = %item_id, deleted = result.deleted_count, "Wishlist remove");
        Ok(result.deleted_count > 0)
    }
}
