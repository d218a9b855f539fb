use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::store_error::StoreResult;
use crate::domain::follows::follow::FollowEdge;
use crate::infrastructure::db::{PgPool, bounded};

pub struct SqlxFollowRepository {
    pub pool: PgPool,
    pub timeout: Duration,
}

impl SqlxFollowRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl FollowRepository for SqlxFollowRepository {
    async fn insert_edge(&self, edge: FollowEdge) -> StoreResult<()> {
        bounded(
            self.timeout,
            sqlx::query("INSERT INTO follows (follower_id, following_id) VALUES ($1, $2)")
                .bind(edge.follower_id)
                .bind(edge.following_id)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn delete_edge(&self, edge: FollowEdge) -> StoreResult<u64> {
        let res = bounded(
            self.timeout,
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
                .bind(edge.follower_id)
                .bind(edge.following_id)
                .execute(&self.pool),
        )
        .await?;
        Ok(res.rows_affected())
    }

    async fn count_following(&self, user_id: Uuid) -> StoreResult<i64> {
        bounded(
            self.timeout,
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*)::BIGINT FROM follows WHERE follower_id = $1",
            )
            .bind(user_id)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn count_followers(&self, user_id: Uuid) -> StoreResult<i64> {
        bounded(
            self.timeout,
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*)::BIGINT FROM follows WHERE following_id = $1",
            )
            .bind(user_id)
            .fetch_one(&self.pool),
        )
        .await
    }
}
