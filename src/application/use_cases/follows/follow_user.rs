use uuid::Uuid;

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::store_error::StoreError;
use crate::domain::follows::follow::FollowEdge;

pub struct FollowUser<'a, R: FollowRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FollowRepository + ?Sized> FollowUser<'a, R> {
    pub async fn execute(&self, follower_id: Uuid, following_id: Uuid) -> ServiceResult<()> {
        let edge = FollowEdge::new(follower_id, following_id);
        if edge.is_self_follow() {
            return Err(ServiceError::SelfFollow);
        }
        match self.repo.insert_edge(edge).await {
            Ok(()) => {
                tracing::info!(follower_id = %follower_id, following_id = %following_id, "follow_created");
                Ok(())
            }
            Err(StoreError::UniqueViolation) => Err(ServiceError::DuplicateEdge),
            Err(StoreError::ForeignKeyViolation) => Err(ServiceError::NotFound("user")),
            Err(e) => Err(e.into()),
        }
    }
}
