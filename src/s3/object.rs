use super::Uploader;
use crate::error::Error;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3 as s3;
use aws_types::region::Region;
use aws_types::SdkConfig;
use bytes::Bytes;
use s3::primitives::ByteStream;
use tracing::{debug, info};

async fn put_object(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    payload: Bytes,
) -> Result<(), Error> {
    let size = payload.len();
    let content_length = i64::try_from(size).map_err(|err| Error::Upload(err.into()))?;
    let response = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_length(content_length)
        .body(ByteStream::from(payload))
        .send()
        .await
        .map_err(s3::Error::from)?;

    debug!(e_tag = ?response.e_tag(), "put_object response");
    info!("success: {key} -> {bucket} | {size} bytes");
    Ok(())
}

/// Credentials and region both come from the SDK's default provider chain.
pub struct DefaultChainUploader {
    client: s3::Client,
}

impl DefaultChainUploader {
    pub async fn load() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(s3::Client::new(&config))
    }

    pub fn new(client: s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Uploader for DefaultChainUploader {
    async fn upload(&self, bucket: &str, key: &str, payload: Bytes) -> Result<(), Error> {
        put_object(&self.client, bucket, key, payload).await
    }

    fn variant(&self) -> &'static str {
        "default-chain"
    }

    fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

/// Credentials still come from the default chain, but the service config is
/// built by hand with the region pinned, ignoring whatever the chain resolved.
pub struct RegionOverrideUploader {
    client: s3::Client,
}

impl RegionOverrideUploader {
    pub async fn load(region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(region_override_client(&shared, region))
    }

    pub fn new(client: s3::Client) -> Self {
        Self { client }
    }
}

fn region_override_client(shared: &SdkConfig, region: &str) -> s3::Client {
    let config = s3::config::Builder::from(shared)
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region.to_owned()))
        .build();
    s3::Client::from_conf(config)
}

#[async_trait]
impl Uploader for RegionOverrideUploader {
    async fn upload(&self, bucket: &str, key: &str, payload: Bytes) -> Result<(), Error> {
        put_object(&self.client, bucket, key, payload).await
    }

    fn variant(&self) -> &'static str {
        "region-override"
    }

    fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}
