//! Request extractors and pagination helpers shared by the route handlers

pub mod pagination;
pub mod path;
pub mod query;

pub use pagination::{PageMeta, PaginationParams};
pub use path::ApiPath;
pub use query::ValidatedQuery;
