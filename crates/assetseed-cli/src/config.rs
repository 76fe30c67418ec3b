use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use assetseed_generate::GenerateOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Generation settings read from a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    pub out_dir: Option<PathBuf>,
    pub count: Option<usize>,
    pub region_count: Option<usize>,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Overlay the keys present in `other`.
    pub fn merge(self, other: GenerateConfig) -> Self {
        Self {
            out_dir: other.out_dir.or(self.out_dir),
            count: other.count.or(self.count),
            region_count: other.region_count.or(self.region_count),
            seed: other.seed.or(self.seed),
        }
    }

    pub fn into_options(self) -> GenerateOptions {
        let defaults = GenerateOptions::default();
        GenerateOptions {
            out_dir: self.out_dir.unwrap_or(defaults.out_dir),
            count: self.count.unwrap_or(defaults.count),
            region_count: self.region_count.unwrap_or(defaults.region_count),
            seed: self.seed.or(defaults.seed),
        }
    }
}
