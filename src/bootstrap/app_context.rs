use std::sync::Arc;

use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::password_hasher::PasswordHasher;
use crate::application::ports::post_repository::PostRepository;
use crate::application::ports::token_service::TokenService;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

/// Built once at startup and shared read-only by every request task.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    post_repo: Arc<dyn PostRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        post_repo: Arc<dyn PostRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            post_repo,
            password_hasher,
            token_service,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn follow_repo(&self) -> Arc<dyn FollowRepository> {
        self.services.follow_repo.clone()
    }

    pub fn post_repo(&self) -> Arc<dyn PostRepository> {
        self.services.post_repo.clone()
    }

    pub fn password_hasher(&self) -> Arc<dyn PasswordHasher> {
        self.services.password_hasher.clone()
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        self.services.token_service.clone()
    }
}
