use uuid::Uuid;

use crate::application::dto::users::ProfileDto;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::follows::follow_counts::FollowCountsQuery;

/// Serves both the caller's own profile and public lookups by id, so the
/// two endpoints always report the same fields.
pub struct GetProfile<'a, U: UserRepository + ?Sized, F: FollowRepository + ?Sized> {
    pub users: &'a U,
    pub follows: &'a F,
}

impl<'a, U, F> GetProfile<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    pub async fn execute(&self, user_id: Uuid) -> ServiceResult<ProfileDto> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::NotFound("user"))?;
        let counts = FollowCountsQuery {
            repo: self.follows,
        }
        .execute(user_id)
        .await?;
        Ok(ProfileDto { user, counts })
    }
}
