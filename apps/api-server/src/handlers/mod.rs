//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, web};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/", web::get().to(blogs::list))
                    .route("/", web::post().to(blogs::create))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            ),
    );
}

/// Fallback for requests no route matched.
pub async fn unknown_endpoint() -> Result<HttpResponse, AppError> {
    Err(AppError::UnknownEndpoint)
}

/// The application with its state, routes and fallback wired in.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_routes)
        .default_service(web::to(unknown_endpoint))
}
