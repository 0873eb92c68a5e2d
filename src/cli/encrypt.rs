//! Encrypt command.

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::Prompt;
use crate::core::backend::Dotenvx;
use crate::core::config::Config;
use crate::core::domain::EncryptOutcome;
use crate::core::reconcile::{AssumeYes, Mode, Reconciler};
use crate::error::Result;

/// Reconcile the plaintext of `env` into its encrypted env file.
pub fn execute(config: &Config, env: &str, update: bool, yes: bool) -> Result<()> {
    let mode = if update { Mode::Update } else { Mode::Additive };
    let backend = Dotenvx::from_config(config);

    let outcome = if yes {
        Reconciler::new(config, backend, AssumeYes).encrypt(env, mode)?
    } else {
        Reconciler::new(config, backend, Prompt).encrypt(env, mode)?
    };

    let enc = config.paths(env)?.enc;
    let enc = output::path(config.relative(&enc).display());

    match outcome {
        EncryptOutcome::Applied(changes) => {
            info!(entries = changes.len(), "encrypt applied");
            let updated = changes.changed_entries().len();
            if updated > 0 {
                output::success(&format!(
                    "encrypted {} ({} new, {} updated)",
                    enc,
                    changes.new_entries().len(),
                    updated
                ));
            } else {
                output::success(&format!(
                    "encrypted {} ({} new)",
                    enc,
                    changes.new_entries().len()
                ));
            }
        }
        EncryptOutcome::NoChanges => {
            output::success(&format!("{} is up to date", enc));
            if !update {
                output::dimmed(&format!(
                    "changed values are only applied with {}",
                    output::cmd("--update")
                ));
            }
        }
        EncryptOutcome::Cancelled(_) => {
            output::warn(&format!("cancelled, {} left unchanged", enc));
        }
    }

    Ok(())
}
