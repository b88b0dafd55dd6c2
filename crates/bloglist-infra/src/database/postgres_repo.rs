//! PostgreSQL blog repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait};

use bloglist_core::domain::{Blog, BlogId, NewBlog};
use bloglist_core::error::RepoError;
use bloglist_core::ports::BlogRepository;

use super::entity::blog::{ActiveModel, Entity as BlogEntity};

/// Blog store backed by a SeaORM connection pool.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let result = BlogEntity::find().all(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(count = result.len(), "Listed blogs");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, RepoError> {
        tracing::debug!(blog_id = %id, "Finding blog by id");

        let result = BlogEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, blog: NewBlog) -> Result<Blog, RepoError> {
        let blog = Blog::from_new(BlogId::generate(), blog);
        tracing::debug!(blog_id = %blog.id, "Inserting blog");

        let model = ActiveModel::from(blog)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn save(&self, blog: Blog) -> Result<Option<Blog>, RepoError> {
        tracing::debug!(blog_id = %blog.id, "Saving blog");

        match ActiveModel::from(blog).update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete(&self, id: BlogId) -> Result<bool, RepoError> {
        let result = BlogEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(blog_id = %id, rows = result.rows_affected, "Deleted blog");
        Ok(result.rows_affected > 0)
    }
}
