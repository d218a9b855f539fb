pub mod create_post;
pub mod list_user_posts;
