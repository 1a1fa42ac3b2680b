use crate::error::Error;
use crate::input;
use crate::key;
use crate::s3::Uploader;
use bytes::Bytes;
use std::io::Write;
use tokio::io::AsyncRead;
use tracing::info;

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bucket: String,
    pub key: String,
    pub payload: Bytes,
}

impl UploadRequest {
    pub fn new(bucket: impl Into<String>, payload: Bytes) -> Self {
        Self {
            bucket: bucket.into(),
            key: key::generate(),
            payload,
        }
    }
}

/// The confirmation goes out before the upload is attempted, so seeing it
/// does not mean the object landed.
pub async fn echo<W: Write>(
    request: &UploadRequest,
    uploader: &dyn Uploader,
    out: &mut W,
) -> Result<(), Error> {
    write!(
        out,
        "Uploading user input to S3 using {}/{}\n\n",
        request.bucket, request.key
    )
    .and_then(|_| out.flush())
    .map_err(Error::Stdout)?;

    info!(
        variant = uploader.variant(),
        region = ?uploader.region(),
        bytes = request.payload.len(),
        "dispatching upload"
    );
    uploader
        .upload(&request.bucket, &request.key, request.payload.clone())
        .await
}

/// Drains `input` to EOF, stamps the key, then confirms and uploads.
pub async fn echo_from<R, W>(
    bucket: impl Into<String>,
    input: R,
    uploader: &dyn Uploader,
    out: &mut W,
) -> Result<UploadRequest, Error>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let payload = input::read_payload(input).await?;
    let request = UploadRequest::new(bucket, payload);
    echo(&request, uploader, out).await?;
    Ok(request)
}
