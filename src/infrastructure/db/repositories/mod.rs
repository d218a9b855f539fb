pub mod follow_repository_sqlx;
pub mod post_repository_sqlx;
pub mod user_repository_sqlx;
