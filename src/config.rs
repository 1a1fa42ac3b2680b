use std::env;

/// Any non-empty value selects the region-override uploader.
pub const ENABLE_IRP: &str = "ENABLE_IRP";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const FALLBACK_REGION: &str = "us-west-2";

/// Environment captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub enable_irp: bool,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadVariant {
    DefaultChain,
    RegionOverride { region: String },
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v: &String| !v.is_empty());

        Self {
            enable_irp: non_empty(ENABLE_IRP).is_some(),
            region: non_empty(AWS_DEFAULT_REGION),
        }
    }

    /// The region only matters for the override path; the default chain
    /// resolves its own.
    pub fn variant(&self) -> UploadVariant {
        if !self.enable_irp {
            return UploadVariant::DefaultChain;
        }
        let region = self
            .region
            .clone()
            .unwrap_or_else(|| FALLBACK_REGION.to_string());
        UploadVariant::RegionOverride { region }
    }
}
