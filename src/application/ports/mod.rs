pub mod follow_repository;
pub mod password_hasher;
pub mod post_repository;
pub mod store_error;
pub mod token_service;
pub mod user_repository;
