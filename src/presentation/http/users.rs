use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::users::ProfileDto;
use crate::application::use_cases::follows::follow_user::FollowUser;
use crate::application::use_cases::follows::unfollow_user::UnfollowUser;
use crate::application::use_cases::users::get_profile::GetProfile;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub following_count: i64,
    pub followers_count: i64,
}

impl From<ProfileDto> for ProfileResponse {
    fn from(p: ProfileDto) -> Self {
        ProfileResponse {
            id: p.user.id,
            username: p.user.username,
            display_name: p.user.display_name,
            bio: p.user.bio,
            created_at: p.user.created_at,
            following_count: p.counts.following_count,
            followers_count: p.counts.followers_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/profile", get(get_own_profile))
        .route("/users/:id", get(get_user_profile))
        .route("/users/:id/follow", post(follow_user).delete(unfollow_user))
        .with_state(ctx)
}

async fn load_profile(ctx: &AppContext, user_id: Uuid) -> Result<ProfileResponse, ApiError> {
    let users = ctx.user_repo();
    let follows = ctx.follow_repo();
    let uc = GetProfile {
        users: users.as_ref(),
        follows: follows.as_ref(),
    };
    Ok(uc.execute(user_id).await?.into())
}

#[utoipa::path(get, path = "/api/profile", tag = "Users", responses(
    (status = 200, body = ProfileResponse),
    (status = 401, body = crate::presentation::http::error::ErrorBody),
    (status = 403, body = crate::presentation::http::error::ErrorBody),
    (status = 404, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn get_own_profile(
    State(ctx): State<AppContext>,
    AuthUser(me): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    Ok(Json(load_profile(&ctx, me.user_id).await?))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "Users", security(()),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 400, body = crate::presentation::http::error::ErrorBody),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn get_user_profile(
    State(ctx): State<AppContext>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Path(id) = path?;
    Ok(Json(load_profile(&ctx, id).await?))
}

#[utoipa::path(post, path = "/api/users/{id}/follow", tag = "Users",
    params(("id" = Uuid, Path, description = "User to follow")),
    responses(
        (status = 201, body = MessageResponse),
        (status = 400, body = crate::presentation::http::error::ErrorBody),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn follow_user(
    State(ctx): State<AppContext>,
    AuthUser(me): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Path(id) = path?;
    let repo = ctx.follow_repo();
    let uc = FollowUser {
        repo: repo.as_ref(),
    };
    uc.execute(me.user_id, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "followed".into(),
        }),
    ))
}

#[utoipa::path(delete, path = "/api/users/{id}/follow", tag = "Users",
    params(("id" = Uuid, Path, description = "User to unfollow")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = crate::presentation::http::error::ErrorBody),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn unfollow_user(
    State(ctx): State<AppContext>,
    AuthUser(me): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let repo = ctx.follow_repo();
    let uc = UnfollowUser {
        repo: repo.as_ref(),
    };
    uc.execute(me.user_id, id).await?;
    Ok(Json(MessageResponse {
        message: "unfollowed".into(),
    }))
}
