//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Item>("items");
        Self { collection }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, item), fields(title = %item.title))]
    async fn create(&self, item: Item) -> ItemResult<Item> {
        self.collection.insert_one(&item).await?;

        tracing::info!(item_id = %item.id, "Listing created");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let item = self.collection.find_one(filter).await?;
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn list_by_seller(&self, seller_id: Uuid) -> ItemResult<Vec<Item>> {
        use futures_util::TryStreamExt;

        let filter = doc! { "userId": to_bson(&seller_id).unwrap_or(Bson::Null) };
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "position": 1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        tracing::info!(item_id = %id, deleted = result.deleted_count, "Listing delete");
        Ok(result.deleted_count > 0)
    }
}
