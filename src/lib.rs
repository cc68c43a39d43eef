pub mod config;
pub mod error;
pub mod keys;
pub mod secret;

pub use config::Config;
pub use error::{Error, Result};
pub use keys::{CookieSecrets, KeyLengths};
pub use secret::{generate_secret, generate_secret_with, ALPHABET};
