use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::search_recipes::{__path_search_recipes, search_recipes};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes", state.args.server.root_path),
        post(search_recipes),
    )
}
