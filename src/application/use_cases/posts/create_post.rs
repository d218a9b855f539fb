use uuid::Uuid;

use crate::application::errors::{ServiceError, ServiceResult, ValidationErrors};
use crate::application::ports::post_repository::PostRepository;
use crate::application::ports::store_error::StoreError;
use crate::domain::posts::post::{Post, normalize_content};

pub struct CreatePost<'a, R: PostRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostRepository + ?Sized> CreatePost<'a, R> {
    pub async fn execute(&self, author_id: Uuid, content: &str) -> ServiceResult<Post> {
        let content = normalize_content(content)
            .map_err(|msg| ServiceError::Validation(ValidationErrors::single("content", msg)))?;
        let post = match self.repo.create_post(author_id, content).await {
            Ok(post) => post,
            // The token outlived its account.
            Err(StoreError::ForeignKeyViolation) => return Err(ServiceError::NotFound("user")),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(post_id = %post.id, user_id = %author_id, "post_created");
        Ok(post)
    }
}
