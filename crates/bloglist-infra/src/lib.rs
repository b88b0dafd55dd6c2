//! # Bloglist Infrastructure
//!
//! Concrete implementations of the ports defined in `bloglist-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL blog store via SeaORM

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
