use crate::domain::follows::follow::FollowCounts;
use crate::domain::users::user::User;

#[derive(Debug, Clone)]
pub struct ProfileDto {
    pub user: User,
    pub counts: FollowCounts,
}
