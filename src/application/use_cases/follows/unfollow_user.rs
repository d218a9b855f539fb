use uuid::Uuid;

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::follow_repository::FollowRepository;
use crate::domain::follows::follow::FollowEdge;

pub struct UnfollowUser<'a, R: FollowRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FollowRepository + ?Sized> UnfollowUser<'a, R> {
    pub async fn execute(&self, follower_id: Uuid, following_id: Uuid) -> ServiceResult<()> {
        let edge = FollowEdge::new(follower_id, following_id);
        // A self edge can never exist, but the request is rejected the same
        // way follow rejects it.
        if edge.is_self_follow() {
            return Err(ServiceError::SelfFollow);
        }
        let removed = self.repo.delete_edge(edge).await?;
        if removed == 0 {
            return Err(ServiceError::EdgeNotFound);
        }
        tracing::info!(follower_id = %follower_id, following_id = %following_id, "follow_removed");
        Ok(())
    }
}
