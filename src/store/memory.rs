//! In-memory store for router tests

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{MovieStore, StoreResult};
use crate::domain::Movie;

#[derive(Default)]
pub struct MemoryMovieStore {
    movies: Vec<Movie>,
    /// Added to the real row count, to simulate writes landing between the
    /// page fetch and the count.
    count_skew: i64,
    fail: bool,
}

impl MemoryMovieStore {
    /// Store holding movies with ids `1..=n`
    pub fn with_movies(n: i32) -> Self {
        Self {
            movies: (1..=n).map(movie).collect(),
            ..Self::default()
        }
    }

    pub fn with_count_skew(mut self, skew: i64) -> Self {
        self.count_skew = skew;
        self
    }

    /// Every call fails as if the pool were exhausted
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

pub fn movie(id: i32) -> Movie {
    Movie {
        id,
        name: format!("Movie {}", id),
        date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(id as u64),
        score: 50.0 + f64::from(id % 50),
        genre: "Drama".to_string(),
        overview: format!("Overview of movie {}", id),
        crew: "Jane Doe, Lead".to_string(),
        orig_title: format!("Movie {}", id),
        status: "Released".to_string(),
        orig_lang: "English".to_string(),
        budget: Decimal::new(1_000_000 * i64::from(id), 0),
        revenue: Decimal::new(250, 2),
        country: "US".to_string(),
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn fetch_page(&self, limit: i64, offset: i64) -> StoreResult<Vec<Movie>> {
        self.check()?;
        Ok(self
            .movies
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> StoreResult<i64> {
        self.check()?;
        Ok(self.movies.len() as i64 + self.count_skew)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Movie>> {
        self.check()?;
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}
