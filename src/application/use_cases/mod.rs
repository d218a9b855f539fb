pub mod auth;
pub mod follows;
pub mod posts;
pub mod users;
