use axum::extract::State;
use lunchatron_core::domain::recipe::{
    entities::RecipeRecord, ports::RecipeService, value_objects::SearchRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::SearchRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub recipes: Vec<RecipeRecord>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Search recipes",
    description = "Finds recipes that use the given ingredients, optionally restricted to a food type.",
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 400, description = "No ingredients provided", body = ApiErrorResponse),
        (status = 500, description = "Recipe search failed", body = ApiErrorResponse)
    ),
    request_body = SearchRecipesValidator
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchRecipesValidator>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .search_recipes(SearchRecipesInput {
            ingredients: payload.ingredients,
            food_type: payload.food_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse { recipes }))
}
