use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{entities::StoredImage, value_objects::UploadImageInput},
};

/// Port for persisting uploaded images
#[cfg_attr(test, mockall::automock)]
pub trait ImageStorage: Send + Sync {
    /// Writes `payload` under `file_name` and returns the stored path.
    fn put_image(
        &self,
        file_name: String,
        payload: Bytes,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for image uploads
#[cfg_attr(test, mockall::automock)]
pub trait ImageService: Send + Sync {
    fn upload_image(
        &self,
        input: UploadImageInput,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;
}
