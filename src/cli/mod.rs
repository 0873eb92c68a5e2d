//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod diff;
pub mod encrypt;
pub mod envs;
pub mod init;
pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand};

use crate::core::config::Config;

/// dotenvx-ops - keep plaintext env files and their encrypted copies in sync.
#[derive(Parser)]
#[command(
    name = "dotenvx-ops",
    about = "Keep plaintext env files in sync with their dotenvx-encrypted counterparts",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fold new plaintext keys into the encrypted env file
    Encrypt {
        /// Environment name (e.g., production)
        env: String,
        /// Also rewrite keys whose values changed
        #[arg(short, long)]
        update: bool,
        /// Apply updates without asking
        #[arg(short, long, requires = "update")]
        yes: bool,
    },

    /// Write the decrypted view of an environment
    Decrypt {
        /// Environment name
        env: String,
    },

    /// Decrypt and overwrite the plaintext env file
    Pull {
        /// Environment name
        env: String,
    },

    /// Show what encrypt would change
    Diff {
        /// Environment name
        env: String,
        /// Include keys whose values changed
        #[arg(short, long)]
        update: bool,
    },

    /// Write a default config and create the env directories
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// List configured environments
    Envs,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Encrypt { env, update, yes } => encrypt::execute(&Config::load()?, &env, update, yes),
        Decrypt { env } => decrypt::decrypt(&Config::load()?, &env),
        Pull { env } => decrypt::pull(&Config::load()?, &env),
        Diff { env, update } => diff::execute(&Config::load()?, &env, update),
        Init { force } => init::execute(force),
        Envs => envs::execute(&Config::load()?),
        Completions { shell } => completions::execute(shell),
    }
}
