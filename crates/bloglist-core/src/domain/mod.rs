//! Domain entities - the core business objects.

mod blog;

pub use blog::{Blog, BlogChanges, BlogId, NewBlog};
