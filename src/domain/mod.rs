//! Domain types and DTOs

pub mod movies;

pub use movies::*;
