use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::upload_image::{__path_upload_image, upload_image};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(upload_image))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/upload-image", state.args.server.root_path),
        post(upload_image),
    )
}
