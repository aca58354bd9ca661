//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::Order;
use crate::repository::OrderRepository;

/// MongoDB implementation of the OrderRepository
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Order>("orders");
        Self { collection }
    }

    async fn list_filtered(&self, filter: mongodb::bson::Document) -> OrderResult<Vec<Order>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "position": 1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let orders: Vec<Order> = cursor.try_collect().await?;

        Ok(orders)
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, order), fields(book = %order.book_title))]
    async fn create(&self, order: Order) -> OrderResult<Order> {
        self.collection.insert_one(&order).await?;

        tracing::info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> OrderResult<Vec<Order>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let orders: Vec<Order> = cursor.try_collect().await?;

        Ok(orders)
    }

    #[instrument(skip(self))]
    async fn list_by_buyer(&self, buyer_id: Uuid) -> OrderResult<Vec<Order>> {
        let filter = doc! { "userId": to_bson(&buyer_id).unwrap_or(Bson::Null) };
        self.list_filtered(filter).await
    }

    #[instrument(skip(self))]
    async fn list_by_seller(&self, seller_id: Uuid) -> OrderResult<Vec<Order>> {
        let filter = doc! { "sellerId": to_bson(&seller_id).unwrap_or(Bson::Null) };
        self.list_filtered(filter).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> OrderResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        tracing::info!(order_id = %id, deleted = result.deleted_count, "Order delete");
        Ok(result.deleted_count > 0)
    }
}
