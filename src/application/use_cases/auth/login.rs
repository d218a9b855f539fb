use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::password_hasher::PasswordHasher;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::{User, normalize_username};

pub struct Login<'a, R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> {
    pub repo: &'a R,
    pub hasher: &'a H,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R, H> Login<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    /// Unknown usernames and wrong passwords both end in `AuthFailed`.
    pub async fn execute(&self, req: &LoginRequest) -> ServiceResult<User> {
        let username = normalize_username(&req.username);
        if username.is_empty() || req.password.is_empty() {
            return Err(ServiceError::AuthFailed);
        }
        // The store cannot hold NUL, so such a name can never match an account.
        let creds = if username.contains('\0') {
            None
        } else {
            self.repo.find_credentials_by_username(username).await?
        };
        let Some(creds) = creds else {
            let _ = self
                .hasher
                .verify(&req.password, self.hasher.decoy_hash())
                .await;
            tracing::debug!("login_rejected");
            return Err(ServiceError::AuthFailed);
        };
        if self
            .hasher
            .verify(&req.password, &creds.password_hash)
            .await?
        {
            Ok(creds.user)
        } else {
            tracing::debug!(user_id = %creds.user.id, "login_rejected");
            Err(ServiceError::AuthFailed)
        }
    }
}
