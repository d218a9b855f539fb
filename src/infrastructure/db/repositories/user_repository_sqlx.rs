use std::time::Duration;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::store_error::StoreResult;
use crate::application::ports::user_repository::{UserCredentials, UserRepository};
use crate::domain::users::user::User;
use crate::infrastructure::db::{PgPool, bounded};

pub struct SqlxUserRepository {
    pub pool: PgPool,
    pub timeout: Duration,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

fn user_from_row(r: &PgRow) -> User {
    User {
        id: r.get("id"),
        username: r.get("username"),
        display_name: r.get("display_name"),
        bio: r.get("bio"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let row = bounded(
            self.timeout,
            sqlx::query(
                r#"INSERT INTO users (username, password_hash) VALUES ($1, $2)
                   RETURNING id, username, display_name, bio, created_at"#,
            )
            .bind(username)
            .bind(password_hash)
            .fetch_one(&self.pool),
        )
        .await?;
        Ok(user_from_row(&row))
    }

    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> StoreResult<Option<UserCredentials>> {
        let row = bounded(
            self.timeout,
            sqlx::query(
                r#"SELECT id, username, display_name, bio, created_at, password_hash
                   FROM users WHERE username = $1"#,
            )
            .bind(username)
            .fetch_optional(&self.pool),
        )
        .await?;
        Ok(row.map(|r| UserCredentials {
            user: user_from_row(&r),
            password_hash: r.get("password_hash"),
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = bounded(
            self.timeout,
            sqlx::query(
                r#"SELECT id, username, display_name, bio, created_at FROM users WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?;
        Ok(row.as_ref().map(user_from_row))
    }
}
