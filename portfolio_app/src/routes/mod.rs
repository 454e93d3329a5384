mod about_routes;
mod page_routes;
mod project_routes;

use crate::app::App;

use portfolio_core::error::PfError;

use axum::extract::FromRequest;
use axum::routing::Router;
use entrait::Impl;
use std::path::Path;
use tower_http::services::ServeDir;

/// Axum router for the real app: the JSON API, the rendered page and images.
pub fn router(images_dir: &Path) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(about_routes::AboutRoutes::<Impl<App>>::router())
                .merge(project_routes::ProjectRoutes::<Impl<App>>::router()),
        )
        .merge(page_routes::PageRoutes::<Impl<App>>::router())
        .nest_service("/images", ServeDir::new(images_dir))
}

/// JSON request body whose rejections are reported as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(PfError))]
struct JsonBody<T>(T);

#[derive(serde::Serialize, serde::Deserialize, Debug)]
struct MessageBody {
    message: String,
}
