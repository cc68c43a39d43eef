use std::fmt;
use std::io::Write;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::{Error, Result};
use crate::secret::generate_secret_with;

pub const DEFAULT_HASH_KEY_LENGTH: usize = 64;
pub const DEFAULT_BLOCK_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengths {
    pub hash_key: usize,
    pub block_key: usize,
}

impl Default for KeyLengths {
    fn default() -> Self {
        Self {
            hash_key: DEFAULT_HASH_KEY_LENGTH,
            block_key: DEFAULT_BLOCK_KEY_LENGTH,
        }
    }
}

impl KeyLengths {
    pub fn validate(&self) -> Result<()> {
        if self.hash_key == 0 {
            return Err(Error::InvalidLength { key: "hash key" });
        }
        if self.block_key == 0 {
            return Err(Error::InvalidLength { key: "block key" });
        }
        Ok(())
    }
}

/// A hash key (signs cookie contents) and a block key (encrypts them).
#[derive(Clone, PartialEq, Eq)]
pub struct CookieSecrets {
    pub hash_key: String,
    pub block_key: String,
}

impl CookieSecrets {
    pub fn generate(lengths: &KeyLengths) -> Result<Self> {
        Self::generate_with(&mut OsRng, lengths)
    }

    pub fn generate_with<R>(rng: &mut R, lengths: &KeyLengths) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        lengths.validate()?;

        let hash_key = generate_secret_with(rng, lengths.hash_key)?;
        debug!(length = lengths.hash_key, "generated hash key");

        let block_key = generate_secret_with(rng, lengths.block_key)?;
        debug!(length = lengths.block_key, "generated block key");

        Ok(Self { hash_key, block_key })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}

// Lengths only, so the keys never end up in logs.
impl fmt::Debug for CookieSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieSecrets")
            .field("hash_key", &format_args!("<{} chars>", self.hash_key.len()))
            .field("block_key", &format_args!("<{} chars>", self.block_key.len()))
            .finish()
    }
}

impl fmt::Display for CookieSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash key: {}\nBlock key: {}", self.hash_key, self.block_key)
    }
}
