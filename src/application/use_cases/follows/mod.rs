pub mod follow_counts;
pub mod follow_user;
pub mod unfollow_user;
