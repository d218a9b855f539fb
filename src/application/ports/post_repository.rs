use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::store_error::StoreResult;
use crate::domain::posts::post::{Post, PostWithAuthor};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, user_id: Uuid, content: &str) -> StoreResult<Post>;
    /// Newest first.
    async fn list_by_user(&self, user_id: Uuid) -> StoreResult<Vec<PostWithAuthor>>;
}
