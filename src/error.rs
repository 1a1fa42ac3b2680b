use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Can't read from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Can't write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    /// Every failure surfaced by the SDK on upload, undifferentiated.
    #[error("Can't upload to S3: {0}")]
    Upload(#[source] BoxError),
}

impl From<aws_sdk_s3::Error> for Error {
    fn from(err: aws_sdk_s3::Error) -> Self {
        Error::Upload(Box::new(err))
    }
}
