use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::posts::create_post::CreatePost;
use crate::application::use_cases::posts::list_user_posts::ListUserPosts;
use crate::bootstrap::app_context::AppContext;
use crate::domain::posts::post::{Post, PostWithAuthor};
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreatePostRequest {
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        PostResponse {
            id: p.id,
            user_id: p.user_id,
            content: p.content,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostItem {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
}

impl From<PostWithAuthor> for PostItem {
    fn from(p: PostWithAuthor) -> Self {
        PostItem {
            id: p.id,
            content: p.content,
            created_at: p.created_at,
            user_id: p.user_id,
            username: p.username,
            display_name: p.display_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostItem>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/posts", post(create_post))
        .route("/users/:id/posts", get(list_user_posts))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/posts", tag = "Posts", request_body = CreatePostRequest, responses(
    (status = 201, body = PostResponse),
    (status = 400, body = crate::presentation::http::error::ErrorBody),
    (status = 401, body = crate::presentation::http::error::ErrorBody),
    (status = 403, body = crate::presentation::http::error::ErrorBody),
    (status = 404, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn create_post(
    State(ctx): State<AppContext>,
    AuthUser(me): AuthUser,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let Json(req) = payload?;
    let repo = ctx.post_repo();
    let uc = CreatePost {
        repo: repo.as_ref(),
    };
    let post = uc.execute(me.user_id, &req.content).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

#[utoipa::path(get, path = "/api/users/{id}/posts", tag = "Posts", security(()),
    params(("id" = Uuid, Path, description = "Author id")),
    responses(
        (status = 200, body = PostListResponse),
        (status = 400, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn list_user_posts(
    State(ctx): State<AppContext>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<PostListResponse>, ApiError> {
    let Path(id) = path?;
    let repo = ctx.post_repo();
    let uc = ListUserPosts {
        repo: repo.as_ref(),
    };
    let posts = uc.execute(id).await?;
    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}
