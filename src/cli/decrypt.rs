//! Decrypt and pull commands.

use crate::cli::output;
use crate::core::backend::Dotenvx;
use crate::core::config::Config;
use crate::core::reconcile::{AlwaysDecline, Reconciler};
use crate::error::Result;

/// Write the decrypted view of `env`.
pub fn decrypt(config: &Config, env: &str) -> Result<()> {
    let report =
        Reconciler::new(config, Dotenvx::from_config(config), AlwaysDecline).decrypt(env)?;

    output::success(&format!(
        "decrypted {} to {} ({} entries)",
        env,
        output::path(config.relative(&report.latest).display()),
        report.entries
    ));
    Ok(())
}

/// Decrypt `env` and overwrite its plaintext file.
pub fn pull(config: &Config, env: &str) -> Result<()> {
    let report =
        Reconciler::new(config, Dotenvx::from_config(config), AlwaysDecline).pull(env)?;
    let plain = config.paths(env)?.plain;

    output::success(&format!(
        "pulled {} into {} ({} entries)",
        env,
        output::path(config.relative(&plain).display()),
        report.entries
    ));
    Ok(())
}
