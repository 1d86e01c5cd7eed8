//! Uploaded image configuration.

use serde::{Deserialize, Serialize};

/// Settings for admin image uploads. The object store itself is external.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Public base URL objects are served from.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Prefix prepended to generated object names.
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,
    /// Maximum upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Accepted image content types.
    #[serde(default = "default_allowed_types")]
    pub allowed_content_types: Vec<String>,
}

impl StorageConfig {
    /// Public URL for an object name.
    pub fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            object_name
        )
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            image_prefix: default_image_prefix(),
            max_upload_size_bytes: default_max_upload(),
            allowed_content_types: default_allowed_types(),
        }
    }
}

fn default_public_base_url() -> String {
    "https://yoursupabase.supabase.co/storage/v1/object/public".to_string()
}

fn default_image_prefix() -> String {
    "images".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "image/webp".to_string(),
    ]
}
