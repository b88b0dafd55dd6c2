//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::BlogRepository;
use bloglist_infra::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
use bloglist_infra::PostgresBlogRepository;

/// Which store backs the blog repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub store: StoreKind,
}

impl AppState {
    pub fn new(blogs: Arc<dyn BlogRepository>, store: StoreKind) -> Self {
        Self { blogs, store }
    }

    /// State backed by the in-memory store.
    pub fn in_memory(blogs: Arc<InMemoryBlogRepository>) -> Self {
        Self::new(blogs, StoreKind::Memory)
    }

    /// Build the application state with the store the configuration asks for.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match bloglist_infra::database::connect(config).await {
                Ok(db) => Self::new(
                    Arc::new(PostgresBlogRepository::new(db)),
                    StoreKind::Postgres,
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory(Arc::new(InMemoryBlogRepository::new()))
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory(Arc::new(InMemoryBlogRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
            Self::in_memory(Arc::new(InMemoryBlogRepository::new()))
        };

        tracing::info!(store = state.store.as_str(), "Application state initialized");
        state
    }
}
