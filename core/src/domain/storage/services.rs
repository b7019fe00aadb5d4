use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_random_string, services::Service},
    ingredient::ports::{LabelDetector, RelevanceFilter},
    recipe::ports::RecipeSearch,
    storage::{
        entities::StoredImage,
        ports::{ImageService, ImageStorage},
        value_objects::{UploadImageInput, ensure_image_payload, sanitize_file_name},
    },
};

impl<LD, RF, RS, IS> ImageService for Service<LD, RF, RS, IS>
where
    LD: LabelDetector,
    RF: RelevanceFilter,
    RS: RecipeSearch,
    IS: ImageStorage,
{
    #[instrument(skip(self, input), fields(filename = %input.filename))]
    async fn upload_image(&self, input: UploadImageInput) -> Result<StoredImage, CoreError> {
        ensure_image_payload(&input.data, input.mime_type.as_deref())?;

        let size_bytes = input.data.len() as i64;

        // Calculate SHA256 checksum
        let mut hasher = Sha256::new();
        hasher.update(&input.data);
        let checksum_sha256 = hex::encode(hasher.finalize());

        // Random prefix so two uploads with the same name never collide
        let file_name = format!(
            "{}_{}",
            generate_random_string(8),
            sanitize_file_name(&input.filename)
        );

        let path = self
            .image_storage
            .put_image(file_name, input.data)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store image"))?;

        tracing::info!(path = %path, size = size_bytes, "Image saved");

        Ok(StoredImage::new(
            path,
            input.filename,
            input
                .mime_type
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            size_bytes,
            checksum_sha256,
        ))
    }
}
