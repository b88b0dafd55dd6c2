//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use bloglist_core::domain::{Blog, BlogId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub author: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,
    pub likes: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Blog.
impl From<Model> for Blog {
    fn from(model: Model) -> Self {
        Self {
            id: BlogId::from(model.id),
            title: model.title,
            author: model.author,
            url: model.url,
            likes: model.likes,
        }
    }
}

/// Conversion from Domain Blog to SeaORM ActiveModel.
impl From<Blog> for ActiveModel {
    fn from(blog: Blog) -> Self {
        Self {
            id: Set(blog.id.as_uuid()),
            title: Set(blog.title),
            author: Set(blog.author),
            url: Set(blog.url),
            likes: Set(blog.likes),
        }
    }
}
