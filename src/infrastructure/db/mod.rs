use std::future::Future;
use std::time::Duration;

use sqlx::{Pool, Postgres};

use crate::application::ports::store_error::{StoreError, StoreResult};

pub type PgPool = Pool<Postgres>;

pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Runs one store call under a deadline and classifies the failure.
pub async fn bounded<T, F>(limit: Duration, fut: F) -> StoreResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(classify(e)),
        Err(_) => Err(StoreError::Timeout),
    }
}

pub fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::UniqueViolation;
        }
        if db.is_foreign_key_violation() {
            return StoreError::ForeignKeyViolation;
        }
    }
    if matches!(err, sqlx::Error::PoolTimedOut) {
        return StoreError::Timeout;
    }
    StoreError::Other(err.into())
}

pub mod repositories;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bounded_maps_elapsed_deadline_to_timeout() {
        let slow = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, sqlx::Error>(1)
        };
        let res = bounded(Duration::from_millis(10), slow).await;
        assert!(matches!(res, Err(StoreError::Timeout)));
    }

    #[tokio::test]
    async fn bounded_passes_values_through() {
        let res = bounded(Duration::from_secs(1), async { Ok::<_, sqlx::Error>(7) }).await;
        assert_eq!(res.ok(), Some(7));
    }

    #[test]
    fn row_not_found_is_not_a_constraint_error() {
        assert!(matches!(
            classify(sqlx::Error::RowNotFound),
            StoreError::Other(_)
        ));
        assert!(matches!(classify(sqlx::Error::PoolTimedOut), StoreError::Timeout));
    }
}
