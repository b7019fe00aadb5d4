use axum::extract::{Multipart, State};
use lunchatron_core::domain::ingredient::{
    entities::IngredientSet, ports::IngredientService, value_objects::ExtractIngredientsInput,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
    multipart::read_image_field,
};

pub const INGREDIENTS_DETECTED_MESSAGE: &str = "Ingredients detected successfully!";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExtractIngredientsResponse {
    pub message: String,
    pub ingredients: IngredientSet,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "ingredient",
    summary = "Extract ingredients from an image",
    description = "Detects labels in the uploaded image (multipart field `file` or `image`) and returns the lowercase, deduplicated ingredient names.",
    responses(
        (status = 200, body = ExtractIngredientsResponse),
        (status = 400, description = "Missing, empty or non-image file", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Label detection failed", body = ApiErrorResponse)
    ),
)]
pub async fn extract_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ExtractIngredientsResponse>, ApiError> {
    let upload = read_image_field(
        &mut multipart,
        &["file", "image"],
        state.args.storage.max_image_bytes,
    )
    .await?;

    let ingredients = state
        .service
        .extract_ingredients(ExtractIngredientsInput {
            image_data: upload.data,
            mime_type: upload.mime_type,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to extract ingredients");
            ApiError::from(e)
        })?;

    Ok(Response::OK(ExtractIngredientsResponse {
        message: INGREDIENTS_DETECTED_MESSAGE.to_string(),
        ingredients,
    }))
}
