use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::keys::{KeyLengths, DEFAULT_BLOCK_KEY_LENGTH, DEFAULT_HASH_KEY_LENGTH};

/// Optional overrides read from a TOML file. Missing keys keep the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub hash_key_length: usize,
    pub block_key_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_key_length: DEFAULT_HASH_KEY_LENGTH,
            block_key_length: DEFAULT_BLOCK_KEY_LENGTH,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str: String = fs::read_to_string(path)?;
        Self::parse(&config_str)
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }

    /// Replaces the lengths given on the command line; `None` keeps the file value.
    pub fn with_overrides(
        mut self,
        hash_key_length: Option<usize>,
        block_key_length: Option<usize>,
    ) -> Self {
        if let Some(n) = hash_key_length {
            self.hash_key_length = n;
        }
        if let Some(n) = block_key_length {
            self.block_key_length = n;
        }
        self
    }

    pub fn key_lengths(&self) -> Result<KeyLengths> {
        let lengths = KeyLengths {
            hash_key: self.hash_key_length,
            block_key: self.block_key_length,
        };
        lengths.validate()?;
        Ok(lengths)
    }
}
