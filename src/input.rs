use crate::error::Error;
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads until EOF (CTRL+D on a terminal) and hands back the bytes untouched.
pub async fn read_payload<R>(mut reader: R) -> Result<Bytes, Error>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(Bytes::from(buf))
}
