use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use bytes::Bytes;
use lunchatron_core::domain::common::entities::app_errors::CoreError;
use tracing::{error, warn};

use crate::application::http::server::api_entities::api_error::ApiError;

/// An image file read from a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub data: Bytes,
}

/// Reads the first field named in `field_names`; other fields are skipped.
pub async fn read_image_field(
    multipart: &mut Multipart,
    field_names: &[&str],
    max_bytes: usize,
) -> Result<ImageUpload, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        if !field_names.contains(&name.as_str()) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let mime_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        if data.len() > max_bytes {
            warn!(size = data.len(), max_bytes, "Image exceeds the upload limit");
            return Err(CoreError::FileTooLarge.into());
        }

        return Ok(ImageUpload {
            filename,
            mime_type,
            data,
        });
    }

    Err(ApiError::BadRequest(format!(
        "Missing '{}' field in multipart form",
        field_names.join("' or '")
    )))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return CoreError::FileTooLarge.into();
    }

    error!("Failed to read multipart field: {}", e);
    ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
}
