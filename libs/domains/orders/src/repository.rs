use async_trait::async_trait;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::Order;

/// Order data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: Order) -> OrderResult<Order>;

    async fn list(&self) -> OrderResult<Vec<Order>>;

    /// Orders placed by one buyer, in `position` order.
    async fn list_by_buyer(&self, buyer_id: Uuid) -> OrderResult<Vec<Order>>;

    /// Orders received by one seller, in `position` order.
    async fn list_by_seller(&self, seller_id: Uuid) -> OrderResult<Vec<Order>>;

    /// Delete by id. Returns whether a document was removed.
    async fn delete(&self, id: Uuid) -> OrderResult<bool>;
}
