use async_trait::async_trait;

use crate::domain::{Blog, BlogId, NewBlog};
use crate::error::RepoError;

/// Document store client for blogs.
///
/// Updates follow a load-then-mutate-then-save pattern: callers fetch with
/// [`find_by_id`](Self::find_by_id), mutate the entity and hand it back to
/// [`save`](Self::save).
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Every stored blog, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError>;

    /// Find a blog by its id.
    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, RepoError>;

    /// Persist a new blog. The store assigns its id.
    async fn insert(&self, blog: NewBlog) -> Result<Blog, RepoError>;

    /// Write back an existing blog. Returns `None` if it no longer exists.
    async fn save(&self, blog: Blog) -> Result<Option<Blog>, RepoError>;

    /// Delete a blog by its id. Returns whether anything was removed.
    async fn delete(&self, id: BlogId) -> Result<bool, RepoError>;
}
