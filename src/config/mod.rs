//! Splitter configuration.
//!
//! Layered with Figment: serialized defaults, then an optional TOML file,
//! then `CHUNK_*` environment variables. Every constructor validates.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PREFIX: &str = "CHUNK_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid max_chunk_tokens: {0} (must be positive)")]
    InvalidMaxChunkTokens(usize),
    #[error("min_chunk_tokens {min} exceeds max_chunk_tokens {max}")]
    MinExceedsMax { min: usize, max: usize },
    #[error("overlap_tokens {overlap} must be smaller than max_chunk_tokens {max}")]
    OverlapTooLarge { overlap: usize, max: usize },
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    pub max_chunk_tokens: usize,
    /// Chunks estimated below this are merged into a neighbour when the merge fits.
    pub min_chunk_tokens: usize,
    /// Trailing context carried from one chunk into the next. 0 disables.
    pub overlap_tokens: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_chunk_tokens: 500,
            min_chunk_tokens: 50,
            overlap_tokens: 50,
        }
    }
}

impl SplitterConfig {
    /// Pure greedy packing: no minimum merge and no overlap.
    pub fn greedy(max_chunk_tokens: usize) -> Self {
        Self {
            max_chunk_tokens,
            min_chunk_tokens: 0,
            overlap_tokens: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chunk_tokens == 0 {
            return Err(ConfigError::InvalidMaxChunkTokens(self.max_chunk_tokens));
        }
        if self.min_chunk_tokens > self.max_chunk_tokens {
            return Err(ConfigError::MinExceedsMax {
                min: self.min_chunk_tokens,
                max: self.max_chunk_tokens,
            });
        }
        if self.overlap_tokens >= self.max_chunk_tokens {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap_tokens,
                max: self.max_chunk_tokens,
            });
        }
        Ok(())
    }

    /// Load from a TOML file with `CHUNK_*` environment overrides.
    /// A missing file leaves the defaults in place.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Toml::file(path)).merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Parse a TOML document on top of the defaults. Environment is not consulted.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Toml::string(toml)))
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(SplitterConfig::default()))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: SplitterConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }
}
