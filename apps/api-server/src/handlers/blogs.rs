//! Blog resource handlers.

use actix_web::{HttpResponse, web};

use bloglist_core::DomainError;
use bloglist_core::domain::{Blog, BlogChanges, BlogId, NewBlog};
use bloglist_shared::{BlogPayload, BlogResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
    }
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;

    Ok(HttpResponse::Ok().json(blogs.into_iter().map(to_response).collect::<Vec<_>>()))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id: BlogId = path.parse()?;

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

    Ok(HttpResponse::Ok().json(to_response(blog)))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BlogPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let new = NewBlog::new(payload.title, payload.author, payload.url, payload.likes)?;

    let blog = state.blogs.insert(new).await?;
    tracing::info!(blog_id = %blog.id, "Blog created");

    Ok(HttpResponse::Created().json(to_response(blog)))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id: BlogId = path.parse()?;

    if !state.blogs.delete(id).await? {
        tracing::debug!(blog_id = %id, "Delete of unknown blog");
    }

    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/blogs/{id}
///
/// Replaces all four fields; fields missing from the body are cleared.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPayload>,
) -> AppResult<HttpResponse> {
    let id: BlogId = path.parse()?;
    let payload = body.into_inner();

    let mut blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    blog.overwrite(BlogChanges {
        title: payload.title,
        author: payload.author,
        url: payload.url,
        likes: payload.likes,
    });

    // Deleted between load and save.
    let saved = state.blogs.save(blog).await?.ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(to_response(saved)))
}
