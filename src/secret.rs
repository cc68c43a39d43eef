use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// Case-sensitive hexadecimal digits, lowercase letters first.
pub const ALPHABET: &[u8; 22] = b"0123456789abcdefABCDEF";

// Largest multiple of the alphabet size that fits in a byte. Bytes at or
// above it are discarded so every character is equally likely.
const ACCEPT_BELOW: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Generates `length` characters drawn uniformly from [`ALPHABET`] using the
/// operating system's random source.
pub fn generate_secret(length: usize) -> Result<String> {
    generate_secret_with(&mut OsRng, length)
}

/// Same as [`generate_secret`], with the random source supplied by the caller.
pub fn generate_secret_with<R>(rng: &mut R, length: usize) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    if length == 0 {
        return Err(Error::InvalidLength { key: "secret" });
    }

    let mut secret = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while secret.len() < length {
        rng.try_fill_bytes(&mut buf)?;

        for byte in buf.iter().copied().filter(|b| *b < ACCEPT_BELOW) {
            secret.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
            if secret.len() == length {
                break;
            }
        }
    }

    Ok(secret)
}
