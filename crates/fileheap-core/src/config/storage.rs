//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Object storage configuration.
///
/// All objects live in a single fixed bucket; the key of an object is the
/// original filename of the upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend: `"s3"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Bucket all objects are written to.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// S3 endpoint URL. Empty for AWS; set for S3-compatible services
    /// such as MinIO or Yandex Object Storage.
    #[serde(default)]
    pub endpoint: String,
    /// Region name.
    #[serde(default = "default_region")]
    pub region: String,
    /// Access key ID. Empty means the ambient AWS credential chain.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Lifetime of presigned download URLs in seconds.
    #[serde(default = "default_presign_ttl")]
    pub presign_ttl_seconds: u64,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            bucket: default_bucket(),
            endpoint: String::new(),
            region: default_region(),
            access_key: String::new(),
            secret_key: String::new(),
            presign_ttl_seconds: default_presign_ttl(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_provider() -> String {
    "s3".to_string()
}

fn default_bucket() -> String {
    "files-heap".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_presign_ttl() -> u64 {
    600
}

fn default_max_upload() -> u64 {
    1_073_741_824 // 1 GiB
}
