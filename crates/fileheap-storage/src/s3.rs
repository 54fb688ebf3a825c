//! S3-compatible object storage backend.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use fileheap_core::config::storage::StorageConfig;
use fileheap_core::error::{AppError, ErrorKind};
use fileheap_core::result::AppResult;
use fileheap_core::traits::object_store::ObjectStore;

/// Object storage backend for S3-compatible services.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a client from configuration.
    ///
    /// When `access_key` is empty the ambient AWS credential chain is
    /// used. A custom `endpoint` switches to path-style addressing for
    /// non-AWS services.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.bucket must not be empty"));
        }

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if !config.access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "fileheap-config",
            ));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            builder = builder
                .endpoint_url(&config.endpoint)
                .force_path_style(true);
        }
        let client = Client::from_conf(builder.build());

        info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = %config.endpoint,
            "Initialized S3 object store"
        );

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
        })
    }
}

/// Maps an SDK failure to the unified error, separating credential
/// problems from an unreachable backend and from service-side failures.
fn map_sdk_error<E>(operation: &str, err: SdkError<E>) -> AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    match &err {
        SdkError::ConstructionFailure(_) => AppError::with_source(
            ErrorKind::Configuration,
            "Object storage credentials are not configured",
            err,
        ),
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            AppError::with_source(ErrorKind::Storage, "Object storage is unreachable", err)
        }
        _ => AppError::with_source(
            ErrorKind::Storage,
            format!("Object storage {operation} failed"),
            err,
        ),
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| map_sdk_error("write", e))?;
        Ok(())
    }

    async fn presigned_get_url(&self, key: &str, ttl: Duration) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| AppError::with_source(ErrorKind::Configuration, "Invalid presign TTL", e))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| map_sdk_error("URL signing", e))?;

        Ok(request.uri().to_string())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error("delete", e))?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error("health check", e))?;
        Ok(true)
    }
}
