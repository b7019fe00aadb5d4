use std::sync::LazyLock;

use bytes::Bytes;
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid file name pattern"));

const FALLBACK_FILE_NAME: &str = "image";

#[derive(Debug, Clone)]
pub struct UploadImageInput {
    pub filename: String,
    pub mime_type: Option<String>,
    pub data: Bytes,
}

/// Reduces a client-supplied name to a safe final path component.
pub fn sanitize_file_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned = UNSAFE_FILE_CHARS.replace_all(last.trim(), "_");
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Rejects empty payloads and declared content types other than `image/*`.
/// A payload without a declared type is accepted.
pub fn ensure_image_payload(data: &[u8], mime_type: Option<&str>) -> Result<(), CoreError> {
    if data.is_empty() {
        return Err(CoreError::Validation("image cannot be empty".to_string()));
    }

    match mime_type {
        Some(mime) if !mime.trim().to_ascii_lowercase().starts_with("image/") => Err(
            CoreError::UnsupportedMedia(format!("expected an image, got {mime}")),
        ),
        _ => Ok(()),
    }
}
