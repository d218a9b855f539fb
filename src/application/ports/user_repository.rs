use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::store_error::StoreResult;
use crate::domain::users::user::User;

#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account. A taken username is reported as
    /// `StoreError::UniqueViolation` by the store itself.
    async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<User>;
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> StoreResult<Option<UserCredentials>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
}
