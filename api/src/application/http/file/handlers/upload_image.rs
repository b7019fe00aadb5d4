use axum::extract::{Multipart, State};
use lunchatron_core::domain::storage::{
    entities::StoredImage, ports::ImageService, value_objects::UploadImageInput,
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

pub const IMAGE_UPLOADED_MESSAGE: &str = "Image uploaded successfully!";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadImageResponse {
    pub message: String,
    pub path: String,
    pub file: StoredImage,
}

#[utoipa::path(
    post,
    path = "/upload-image",
    tag = "file",
    summary = "Upload an image",
    description = "Stores the multipart field `file` in the upload directory under a sanitized, randomly prefixed name.",
    responses(
        (status = 200, body = UploadImageResponse),
        (status = 400, description = "Missing, empty or non-image file", body = ApiErrorResponse),
        (status = 413, description = "File too large", body = ApiErrorResponse),
        (status = 500, description = "Failed to store the image", body = ApiErrorResponse)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadImageResponse>, ApiError> {
    let upload =
        read_image_field(&mut multipart, &["file"], state.args.storage.max_image_bytes).await?;

    let filename = upload.filename.unwrap_or_default();

    let stored = state
        .service
        .upload_image(UploadImageInput {
            filename: filename.clone(),
            mime_type: upload.mime_type,
            data: upload.data,
        })
        .await
        .map_err(|e| {
            error!(error = %e, filename = %filename, "Failed to upload image");
            ApiError::from(e)
        })?;

    Ok(Response::OK(UploadImageResponse {
        message: IMAGE_UPLOADED_MESSAGE.to_string(),
        path: stored.path.clone(),
        file: stored,
    }))
}
