//! dotenvx-ops - keep plaintext env files in sync with their encrypted copies.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotenvx_ops::cli::output;
use dotenvx_ops::cli::{execute, Cli};
use dotenvx_ops::error::{ConfigError, Error, ValidationError};

fn main() {
    let cli = Cli::parse();

    // DOTENVX_OPS_LOG overrides the verbosity flag
    let filter = EnvFilter::try_from_env("DOTENVX_OPS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dotenvx_ops=debug")
        } else {
            EnvFilter::new("dotenvx_ops=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::UnknownEnvironment { .. }) => Some("run: dotenvx-ops envs"),
            Error::Config(ConfigError::AlreadyInitialized(_)) => {
                Some("run: dotenvx-ops init --force")
            }
            Error::Validation(ValidationError::PlaintextValues { .. }) => {
                Some("re-encrypt the file with dotenvx before committing it")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
