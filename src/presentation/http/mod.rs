use axum::Router;

use crate::bootstrap::app_context::AppContext;

pub mod auth;
pub mod error;
pub mod health;
pub mod posts;
pub mod users;

/// Every `/api` route that runs on the application context. Health is
/// mounted separately because it talks to the pool directly.
pub fn routes(ctx: AppContext) -> Router {
    let api = Router::new()
        .merge(auth::routes(ctx.clone()))
        .merge(users::routes(ctx.clone()))
        .merge(posts::routes(ctx));
    Router::new().nest("/api", api)
}
