use async_trait::async_trait;
use sqlx::PgPool;

use super::{MovieStore, StoreResult};
use crate::domain::Movie;

#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn fetch_page(&self, limit: i64, offset: i64) -> StoreResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, name, date, score, genre, overview, crew, orig_title,
                   status, orig_lang, budget, revenue, country
            FROM movies
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count(&self) -> StoreResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, name, date, score, genre, overview, crew, orig_title,
                   status, orig_lang, budget, revenue, country
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
