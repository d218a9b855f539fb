use uuid::Uuid;

use crate::application::errors::ServiceResult;
use crate::application::ports::follow_repository::FollowRepository;
use crate::domain::follows::follow::FollowCounts;

pub struct FollowCountsQuery<'a, R: FollowRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FollowRepository + ?Sized> FollowCountsQuery<'a, R> {
    // Two independent reads; they are separate facts, not a joint invariant.
    pub async fn execute(&self, user_id: Uuid) -> ServiceResult<FollowCounts> {
        let following_count = self.repo.count_following(user_id).await?;
        let followers_count = self.repo.count_followers(user_id).await?;
        Ok(FollowCounts {
            following_count,
            followers_count,
        })
    }
}
