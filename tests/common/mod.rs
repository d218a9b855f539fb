#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use social_api::application::ports::follow_repository::FollowRepository;
use social_api::application::ports::password_hasher::PasswordHasher;
use social_api::application::ports::post_repository::PostRepository;
use social_api::application::ports::store_error::{StoreError, StoreResult};
use social_api::application::ports::user_repository::{UserCredentials, UserRepository};
use social_api::bootstrap::app_context::{AppContext, AppServices};
use social_api::bootstrap::config::Config;
use social_api::domain::follows::follow::FollowEdge;
use social_api::domain::posts::post::{Post, PostWithAuthor};
use social_api::domain::users::user::User;
use social_api::infrastructure::crypto::jwt::JwtTokenService;
use social_api::infrastructure::crypto::password::Argon2PasswordHasher;

pub const SECRET: &str = "integration-test-secret";

#[derive(Default)]
struct Tables {
    users: Vec<UserCredentials>,
    follows: HashSet<FollowEdge>,
    posts: Vec<Post>,
}

/// In-memory store that enforces the same constraints as the SQL schema:
/// unique usernames, unique follow pairs, no self edges, and foreign keys
/// from follows/posts to users.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn edge_count(&self) -> usize {
        self.tables.lock().unwrap().follows.len()
    }

    pub fn has_edge(&self, follower_id: Uuid, following_id: Uuid) -> bool {
        self.tables
            .lock()
            .unwrap()
            .follows
            .contains(&FollowEdge::new(follower_id, following_id))
    }

    pub fn post_count(&self) -> usize {
        self.tables.lock().unwrap().posts.len()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn stored_hash(&self, username: &str) -> Option<String> {
        self.tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|c| c.user.username == username)
            .map(|c| c.password_hash.clone())
    }
}

/// Postgres refuses NUL in text columns, both in writes and in query parameters.
fn reject_nul(value: &str) -> StoreResult<()> {
    if value.contains('\0') {
        return Err(StoreError::Other(anyhow::anyhow!(
            "invalid byte sequence for encoding \"UTF8\": 0x00"
        )));
    }
    Ok(())
}

fn user_exists(t: &Tables, id: Uuid) -> bool {
    t.users.iter().any(|c| c.user.id == id)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        reject_nul(username)?;
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|c| c.user.username == username) {
            return Err(StoreError::UniqueViolation);
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            display_name: None,
            bio: None,
            created_at: Utc::now(),
        };
        t.users.push(UserCredentials {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(user)
    }

    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> StoreResult<Option<UserCredentials>> {
        reject_nul(username)?;
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|c| c.user.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users
            .iter()
            .find(|c| c.user.id == id)
            .map(|c| c.user.clone()))
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn insert_edge(&self, edge: FollowEdge) -> StoreResult<()> {
        let mut t = self.tables.lock().unwrap();
        if edge.is_self_follow() {
            return Err(StoreError::Other(anyhow::anyhow!(
                "check constraint follows_no_self_follow"
            )));
        }
        if !user_exists(&t, edge.follower_id) || !user_exists(&t, edge.following_id) {
            return Err(StoreError::ForeignKeyViolation);
        }
        if !t.follows.insert(edge) {
            return Err(StoreError::UniqueViolation);
        }
        Ok(())
    }

    async fn delete_edge(&self, edge: FollowEdge) -> StoreResult<u64> {
        let mut t = self.tables.lock().unwrap();
        Ok(u64::from(t.follows.remove(&edge)))
    }

    async fn count_following(&self, user_id: Uuid) -> StoreResult<i64> {
        let t = self.tables.lock().unwrap();
        Ok(t.follows.iter().filter(|e| e.follower_id == user_id).count() as i64)
    }

    async fn count_followers(&self, user_id: Uuid) -> StoreResult<i64> {
        let t = self.tables.lock().unwrap();
        Ok(t.follows.iter().filter(|e| e.following_id == user_id).count() as i64)
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create_post(&self, user_id: Uuid, content: &str) -> StoreResult<Post> {
        reject_nul(content)?;
        let mut t = self.tables.lock().unwrap();
        if !user_exists(&t, user_id) {
            return Err(StoreError::ForeignKeyViolation);
        }
        // Strictly increasing timestamps, like clock_timestamp() per insert.
        let mut created_at: DateTime<Utc> = Utc::now();
        if let Some(last) = t.posts.iter().map(|p| p.created_at).max() {
            if created_at <= last {
                created_at = last + Duration::microseconds(1);
            }
        }
        let post = Post {
            id: Uuid::new_v4(),
            user_id,
            content: content.to_string(),
            created_at,
        };
        t.posts.push(post.clone());
        Ok(post)
    }

    async fn list_by_user(&self, user_id: Uuid) -> StoreResult<Vec<PostWithAuthor>> {
        let t = self.tables.lock().unwrap();
        let Some(author) = t.users.iter().find(|c| c.user.id == user_id) else {
            return Ok(Vec::new());
        };
        let mut out: Vec<PostWithAuthor> = t
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| PostWithAuthor {
                id: p.id,
                content: p.content.clone(),
                created_at: p.created_at,
                user_id: author.user.id,
                username: author.user.username.clone(),
                display_name: author.user.display_name.clone(),
            })
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}

/// Cheap stand-in so route tests do not pay for Argon2 on every request.
/// `end_to_end.rs` runs against the real hasher.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> anyhow::Result<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, password_hash: &str) -> anyhow::Result<bool> {
        Ok(password_hash.strip_prefix("plain$") == Some(password))
    }

    fn decoy_hash(&self) -> &str {
        "plain$\u{0}decoy"
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub tokens: Arc<JwtTokenService>,
}

fn build(hasher: Arc<dyn PasswordHasher>) -> TestApp {
    let cfg = Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap();
    let store = Arc::new(MemoryStore::default());
    let tokens = Arc::new(JwtTokenService::new(SECRET, cfg.jwt_expires_secs));
    let services = AppServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        hasher,
        tokens.clone(),
    );
    let ctx = AppContext::new(cfg, services);
    TestApp {
        router: social_api::presentation::http::routes(ctx),
        store,
        tokens,
    }
}

pub fn spawn_app() -> TestApp {
    build(Arc::new(PlainHasher))
}

pub fn spawn_app_with_argon2() -> TestApp {
    build(Arc::new(Argon2PasswordHasher::new().unwrap()))
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/api/register",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/api/login",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Registers and logs in, returning (user id, access token).
    pub async fn signup(&self, username: &str) -> (Uuid, String) {
        let (status, body) = self.register(username, "password1").await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let (status, body) = self.login(username, "password1").await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let id = Uuid::parse_str(body["user"]["id"].as_str().unwrap()).unwrap();
        let token = body["access_token"].as_str().unwrap().to_string();
        (id, token)
    }
}
