use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::DomainError;

/// Store-assigned identifier of a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Generate a fresh identifier. Only store adapters should call this.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for BlogId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for BlogId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::MalformedId(s.to_string()))
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog entity - a single bookmarked blog post.
///
/// Every field except `id` may be absent: an update replaces all four fields
/// with whatever the caller sent, including nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl Blog {
    /// Attach a store-assigned id to a validated creation request.
    pub fn from_new(id: BlogId, new: NewBlog) -> Self {
        Self {
            id,
            title: Some(new.title),
            author: new.author,
            url: Some(new.url),
            likes: Some(new.likes),
        }
    }

    /// Replace all mutable fields. Nothing is merged.
    pub fn overwrite(&mut self, changes: BlogChanges) {
        self.title = changes.title;
        self.author = changes.author;
        self.url = changes.url;
        self.likes = changes.likes;
    }
}

/// A validated request to create a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl NewBlog {
    /// Build a creation request from loosely-typed input.
    ///
    /// `title` and `url` must both be present and non-empty. Missing, `null`
    /// or zero `likes` become `0`.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
    ) -> Result<Self, DomainError> {
        let title = title.filter(|t| !t.is_empty());
        let url = url.filter(|u| !u.is_empty());

        let (Some(title), Some(url)) = (title, url) else {
            return Err(DomainError::Validation(
                "title and url are required".to_string(),
            ));
        };

        Ok(Self {
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
        })
    }
}

/// Full replacement of a blog's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}
