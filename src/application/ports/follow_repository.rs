use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::store_error::StoreResult;
use crate::domain::follows::follow::FollowEdge;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Duplicate edges come back as `StoreError::UniqueViolation`, a missing
    /// target user as `StoreError::ForeignKeyViolation`.
    async fn insert_edge(&self, edge: FollowEdge) -> StoreResult<()>;
    /// Returns the number of rows removed.
    async fn delete_edge(&self, edge: FollowEdge) -> StoreResult<u64>;
    async fn count_following(&self, user_id: Uuid) -> StoreResult<i64>;
    async fn count_followers(&self, user_id: Uuid) -> StoreResult<i64>;
}
