//! MongoDB implementation of AccountRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AccountResult;
use crate::models::{Account, Role};
use crate::repository::AccountRepository;

/// MongoDB implementation of the AccountRepository.
///
/// One instance serves all three roles; the collection is picked per call
/// from [`Role::collection`].
pub struct MongoAccountRepository {
    db: Database,
}

impl MongoAccountRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, role: Role) -> Collection<Account> {
        self.db.collection::<Account>(role.collection())
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, role: Role, email: &str) -> AccountResult<Option<Account>> {
        let account = self
            .collection(role)
            .find_one(doc! { "email": email })
            .await?;
        Ok(account)
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn create(&self, role: Role, account: Account) -> AccountResult<Account> {
        self.collection(role).insert_one(&account).await?;

        tracing::info!(account_id = %account.id, %role, "Account created");
        Ok(account)
    }

    #[instrument(skip(self))]
    async fn list(&self, role: Role) -> AccountResult<Vec<Account>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection(role).find(doc! {}).await?;
        let accounts: Vec<Account> = cursor.try_collect().await?;

        Ok(accounts)
    }

    #[instrument(skip(self))]
    async fn delete(&self, role: Role, id: Uuid) -> AccountResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection(role).delete_one(filter).await?;

        tracing::info!(account_id = %id, %role, deleted = result.deleted_count, "Account delete");
        Ok(result.deleted_count > 0)
    }
}
