use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AccountResult;
use crate::models::{Account, Role};

/// Account data access, parameterized by [`Role`] so admins, sellers and
/// buyers share one implementation over their three collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, role: Role, email: &str) -> AccountResult<Option<Account>>;

    async fn create(&self, role: Role, account: Account) -> AccountResult<Account>;

    async fn list(&self, role: Role) -> AccountResult<Vec<Account>>;

    /// Delete by id. Returns whether a document was removed.
    async fn delete(&self, role: Role, id: Uuid) -> AccountResult<bool>;
}
