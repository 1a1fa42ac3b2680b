use chrono::{DateTime, Utc};

pub const KEY_PREFIX: &str = "s3echoer";

/// Second granularity: two runs within the same second share a key and the
/// later upload overwrites the earlier one.
pub fn object_key(at: DateTime<Utc>) -> String {
    format!("{KEY_PREFIX}-{}", at.timestamp())
}

pub fn generate() -> String {
    object_key(Utc::now())
}
