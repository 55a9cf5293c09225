//! S3-compatible media bucket.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use maya_core::storage::{MediaStore, StorageError};

/// `Cache-Control` applied to every uploaded object.
const CACHE_CONTROL: &str = "max-age=3600";

/// Connection settings for the media bucket.
#[derive(Debug, Clone)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible services; `None` means AWS.
    pub endpoint: Option<String>,
    /// Base URL under which objects are publicly readable.
    pub public_base_url: String,
}

/// Writes uploads to an S3 bucket and hands out their public URLs.
#[derive(Clone)]
pub struct S3MediaStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3MediaStore {
    /// Build a client from the ambient AWS credential chain and `config`.
    pub async fn connect(config: &S3StoreConfig) -> Self {
        let client = create_s3_client(config.endpoint.as_deref(), &config.region).await;
        Self::new(client, config)
    }

    pub fn new(client: Client, config: &S3StoreConfig) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .cache_control(CACHE_CONTROL)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                let message = aws_sdk_s3::error::DisplayErrorContext(&e).to_string();
                tracing::error!(bucket = %self.bucket, key, error = %message, "put_object failed");
                StorageError(message)
            })?;

        tracing::debug!(bucket = %self.bucket, key, size, "Stored media object");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        crate::join_public_url(&self.public_base_url, key)
    }
}

/// Create an S3 client, optionally against a custom endpoint.
pub async fn create_s3_client(endpoint_url: Option<&str>, region: &str) -> Client {
    let region = aws_config::Region::new(region.to_string());
    let mut config_loader =
        aws_config::defaults(aws_config::BehaviorVersion::latest()).region(region);

    if let Some(endpoint) = endpoint_url {
        config_loader = config_loader.endpoint_url(endpoint);
    }

    let sdk_config = config_loader.load().await;

    // S3-compatible services generally need path-style addressing.
    let s3_config = if endpoint_url.is_some() {
        aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build()
    } else {
        aws_sdk_s3::config::Builder::from(&sdk_config).build()
    };

    Client::from_conf(s3_config)
}
