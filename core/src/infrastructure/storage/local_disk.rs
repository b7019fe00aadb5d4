use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::ImageStorage};

/// Stores uploads as plain files in one directory.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    /// Creates the upload directory when it does not exist yet.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();

        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            tracing::error!(dir = %root.display(), "Failed to create upload directory: {}", e);
            CoreError::StorageFailure(format!("cannot create {}: {}", root.display(), e))
        })?;

        tracing::info!(dir = %root.display(), "Upload directory ready");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageStorage for LocalImageStorage {
    #[instrument(skip(self, payload), fields(size = payload.len()))]
    async fn put_image(&self, file_name: String, payload: Bytes) -> Result<String, CoreError> {
        // Callers pass a sanitized name; refuse anything that would leave the root.
        let name = Path::new(&file_name);
        if name.components().count() != 1 || name.file_name().is_none() {
            return Err(CoreError::StorageFailure(format!(
                "invalid file name: {file_name}"
            )));
        }

        let path = self.root.join(name);

        tokio::fs::write(&path, &payload).await.map_err(|e| {
            tracing::error!(path = %path.display(), "Failed to write image: {}", e);
            CoreError::StorageFailure(format!("cannot write {}: {}", path.display(), e))
        })?;

        Ok(path.display().to_string())
    }
}
