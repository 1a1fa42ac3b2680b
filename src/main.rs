mod config;
mod echo;
mod error;
mod input;
mod key;
mod s3;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use config::{Config, UploadVariant};
use error::Error;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads stdin until EOF and stores it in S3 as `s3echoer-<unix-seconds>`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Destination bucket
    #[arg(value_name = "BUCKET")]
    bucket: String,
}

#[::tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "s3echoer=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            // stderr is the only place left to report a failed write to stderr
            let _ = err.print();
            error!("Can't continue, expected exactly one bucket name");
            return ExitCode::FAILURE;
        }
        // --help / --version
        Err(err) => err.exit(),
    };

    match run(args, Config::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // RUST_LOG may filter the record below; the diagnostic must still reach stderr
            let _ = report(&err, &mut io::stderr());
            error!(error = %err, "fatal");
            ExitCode::FAILURE
        }
    }
}

/// SDK errors carry their own context chain; print that instead of the
/// wrapper's display so the cause is not repeated.
fn report<W: Write>(err: &Error, out: &mut W) -> io::Result<()> {
    match err {
        Error::Upload(source) => writeln!(
            out,
            "Can't upload to S3: {}",
            DisplayErrorContext(&**source)
        ),
        other => writeln!(out, "{other}"),
    }
}

async fn run(args: Args, config: Config) -> Result<(), Error> {
    let variant = config.variant();
    if let UploadVariant::RegionOverride { region } = &variant {
        info!(region = %region, "ENABLE_IRP set, pinning region");
    }
    let uploader = s3::uploader_for(&variant).await;

    echo::echo_from(
        args.bucket,
        tokio::io::stdin(),
        uploader.as_ref(),
        &mut io::stdout(),
    )
    .await
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::Uploader;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct Rejecting;

    #[async_trait]
    impl Uploader for Rejecting {
        async fn upload(&self, _bucket: &str, _key: &str, _payload: Bytes) -> Result<(), Error> {
            Err(Error::Upload("NoSuchBucket".into()))
        }

        fn variant(&self) -> &'static str {
            "rejecting"
        }

        fn region(&self) -> Option<&str> {
            Some("us-west-2")
        }
    }

    #[tokio::test]
    async fn test_failed_upload_reported_without_subscriber() {
        // no tracing subscriber is installed here, so only `report` can print
        let mut stdout = Vec::new();
        let err = echo::echo_from("my-bucket", &b"hello world"[..], &Rejecting, &mut stdout)
            .await
            .unwrap_err();

        let mut stderr = Vec::new();
        report(&err, &mut stderr).unwrap();
        let printed = String::from_utf8(stderr).unwrap();

        assert!(printed.starts_with("Can't upload to S3: NoSuchBucket"));
        assert_eq!(printed.matches("Can't upload to S3").count(), 1);
        assert!(printed.ends_with('\n'));
        assert!(String::from_utf8(stdout).unwrap().contains("my-bucket/s3echoer-"));
    }

    #[test]
    fn test_stdin_failure_reported() {
        let err = Error::Stdin(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let mut stderr = Vec::new();
        report(&err, &mut stderr).unwrap();
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Can't read from stdin: pipe closed\n"
        );
    }

    #[test]
    fn test_single_bucket_argument() {
        let args = Args::try_parse_from(["s3echoer", "my-bucket"]).unwrap();
        assert_eq!(args.bucket, "my-bucket");
    }

    #[test]
    fn test_missing_bucket_rejected() {
        let err = Args::try_parse_from(["s3echoer"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let err = Args::try_parse_from(["s3echoer", "my-bucket", "other"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
