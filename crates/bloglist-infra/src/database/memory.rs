//! In-memory blog store - used when no database is configured, and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use bloglist_core::domain::{Blog, BlogId, NewBlog};
use bloglist_core::error::RepoError;
use bloglist_core::ports::BlogRepository;

/// In-memory blog store using a Vec behind an async RwLock.
///
/// Listing returns blogs in insertion order.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::with_blogs(Vec::new())
    }

    /// Start from an existing set of blogs.
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: RwLock::new(blogs),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.blogs.read().await.clone())
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, blog: NewBlog) -> Result<Blog, RepoError> {
        let blog = Blog::from_new(BlogId::generate(), blog);
        self.blogs.write().await.push(blog.clone());
        Ok(blog)
    }

    async fn save(&self, blog: Blog) -> Result<Option<Blog>, RepoError> {
        let mut blogs = self.blogs.write().await;
        let Some(slot) = blogs.iter_mut().find(|b| b.id == blog.id) else {
            return Ok(None);
        };

        *slot = blog.clone();
        Ok(Some(blog))
    }

    async fn delete(&self, id: BlogId) -> Result<bool, RepoError> {
        let mut blogs = self.blogs.write().await;
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        Ok(blogs.len() < before)
    }
}
