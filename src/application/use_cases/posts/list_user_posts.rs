use uuid::Uuid;

use crate::application::errors::ServiceResult;
use crate::application::ports::post_repository::PostRepository;
use crate::domain::posts::post::PostWithAuthor;

pub struct ListUserPosts<'a, R: PostRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostRepository + ?Sized> ListUserPosts<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> ServiceResult<Vec<PostWithAuthor>> {
        Ok(self.repo.list_by_user(user_id).await?)
    }
}
