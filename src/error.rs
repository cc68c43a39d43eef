use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{key} length must be greater than zero")]
    InvalidLength { key: &'static str },

    #[error("random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
