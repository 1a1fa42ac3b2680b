mod object;

use crate::config::UploadVariant;
use crate::error::Error;
use async_trait::async_trait;
use bytes::Bytes;

pub use object::{DefaultChainUploader, RegionOverrideUploader};

/// Stores one payload as one object. Implementations differ only in how the
/// underlying client resolves its region.
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, bucket: &str, key: &str, payload: Bytes) -> Result<(), Error>;

    fn variant(&self) -> &'static str;

    /// Region the client will sign for, if one was resolved.
    fn region(&self) -> Option<&str>;
}

pub async fn uploader_for(variant: &UploadVariant) -> Box<dyn Uploader> {
    match variant {
        UploadVariant::DefaultChain => Box::new(DefaultChainUploader::load().await),
        UploadVariant::RegionOverride { region } => {
            Box::new(RegionOverrideUploader::load(region).await)
        }
    }
}
