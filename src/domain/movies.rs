use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Movie entity as stored in the `movies` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: Decimal,
    pub revenue: Decimal,
    pub country: String,
}

/// Response DTO for a single movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

impl From<Movie> for MovieDetailResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            name: m.name,
            date: m.date,
            score: m.score,
            genre: m.genre,
            overview: m.overview,
            crew: m.crew,
            orig_title: m.orig_title,
            status: m.status,
            orig_lang: m.orig_lang,
            budget: decimal_to_f64(m.budget),
            revenue: decimal_to_f64(m.revenue),
            country: m.country,
        }
    }
}

/// Response DTO for one page of the movie listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieDetailResponse>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: i64,
    pub total_items: i64,
}
