use std::time::Duration;

use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::post_repository::PostRepository;
use crate::application::ports::store_error::StoreResult;
use crate::domain::posts::post::{Post, PostWithAuthor};
use crate::infrastructure::db::{PgPool, bounded};

pub struct SqlxPostRepository {
    pub pool: PgPool,
    pub timeout: Duration,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn create_post(&self, user_id: Uuid, content: &str) -> StoreResult<Post> {
        let row = bounded(
            self.timeout,
            sqlx::query(
                r#"INSERT INTO posts (user_id, content) VALUES ($1, $2)
                   RETURNING id, user_id, content, created_at"#,
            )
            .bind(user_id)
            .bind(content)
            .fetch_one(&self.pool),
        )
        .await?;
        Ok(Post {
            id: row.get("id"),
            user_id: row.get("user_id"),
            content: row.get("content"),
            created_at: row.get("created_at"),
        })
    }

    async fn list_by_user(&self, user_id: Uuid) -> StoreResult<Vec<PostWithAuthor>> {
        let rows = bounded(
            self.timeout,
            sqlx::query(
                r#"SELECT p.id, p.content, p.created_at,
                          u.id AS user_id, u.username, u.display_name
                   FROM posts p
                   JOIN users u ON u.id = p.user_id
                   WHERE p.user_id = $1
                   ORDER BY p.created_at DESC"#,
            )
            .bind(user_id)
            .fetch_all(&self.pool),
        )
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| PostWithAuthor {
                id: r.get("id"),
                content: r.get("content"),
                created_at: r.get("created_at"),
                user_id: r.get("user_id"),
                username: r.get("username"),
                display_name: r.get("display_name"),
            })
            .collect())
    }
}
