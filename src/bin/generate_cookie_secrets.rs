use clap::Parser;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

use cookie_secrets::{Config, CookieSecrets, KeyLengths};

/// Print a random hash key and block key for signing and encrypting cookies.
#[derive(Debug, Parser)]
#[command(name = "generate_cookie_secrets", version)]
struct Cli {
    /// TOML file with `hash_key_length` and/or `block_key_length`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the hash key (default 64)
    #[arg(long)]
    hash_key_length: Option<usize>,

    /// Length of the block key (default 32)
    #[arg(long)]
    block_key_length: Option<usize>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    fn key_lengths(&self) -> Result<KeyLengths, Box<dyn Error>> {
        let config: Config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                Config::load(path)?
            }
            None => Config::default(),
        };

        let lengths = config
            .with_overrides(self.hash_key_length, self.block_key_length)
            .key_lengths()?;
        Ok(lengths)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let lengths = cli.key_lengths()?;
    info!(hash_key = lengths.hash_key, block_key = lengths.block_key, "generating cookie secrets");

    let secrets = CookieSecrets::generate(&lengths)?;
    secrets.write_to(&mut io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to generate cookie secrets: {}", e);
            ExitCode::FAILURE
        }
    }
}
