use crate::application::errors::{ServiceError, ServiceResult, ValidationErrors};
use crate::application::ports::password_hasher::PasswordHasher;
use crate::application::ports::store_error::StoreError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::{
    User, normalize_username, password_violations, username_violations,
};

pub struct Register<'a, R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> {
    pub repo: &'a R,
    pub hasher: &'a H,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R, H> Register<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    pub async fn execute(&self, req: &RegisterRequest) -> ServiceResult<User> {
        let username = normalize_username(&req.username);
        let mut errors = ValidationErrors::default();
        errors.push_all("username", username_violations(username));
        errors.push_all("password", password_violations(&req.password));
        errors.into_result()?;

        let hash = self.hasher.hash(&req.password).await?;
        // The unique index decides; no lookup beforehand.
        match self.repo.create_user(username, &hash).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, username = %user.username, "user_registered");
                Ok(user)
            }
            Err(StoreError::UniqueViolation) => Err(ServiceError::DuplicateUsername),
            Err(e) => Err(e.into()),
        }
    }
}
