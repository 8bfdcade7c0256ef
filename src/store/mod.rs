//! Data access for the `movies` table
//!
//! Handlers only see [`MovieStore`]; the Postgres implementation is the one
//! wired in at startup.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::domain::Movie;

pub use postgres::PgMovieStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Read access to persisted movies
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// One page of movies in ascending id order
    async fn fetch_page(&self, limit: i64, offset: i64) -> StoreResult<Vec<Movie>>;

    /// Number of movies in the table
    async fn count(&self) -> StoreResult<i64>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Movie>>;

    /// Cheap round trip used by the health endpoint
    async fn ping(&self) -> StoreResult<()>;
}
