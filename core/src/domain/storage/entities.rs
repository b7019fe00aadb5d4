use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredImage {
    pub id: Uuid,
    /// Location reported back to the client, e.g. `uploads/a1B2c3D4_salad.jpg`.
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
    pub created_at: DateTime<Utc>,
}

impl StoredImage {
    pub fn new(
        path: String,
        original_name: String,
        mime_type: String,
        size_bytes: i64,
        checksum_sha256: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            path,
            original_name,
            mime_type,
            size_bytes,
            checksum_sha256,
            created_at: now,
        }
    }
}
