//! Diff command.
//!
//! Shows what `encrypt` would change without touching the encrypted file.

use crate::cli::{output, prompt};
use crate::core::backend::Dotenvx;
use crate::core::config::Config;
use crate::core::reconcile::{AlwaysDecline, Mode, Reconciler};
use crate::error::Result;

/// Preview the change set for `env`.
pub fn execute(config: &Config, env: &str, update: bool) -> Result<()> {
    let mode = if update { Mode::Update } else { Mode::Additive };
    let changes =
        Reconciler::new(config, Dotenvx::from_config(config), AlwaysDecline).preview(env, mode)?;

    if changes.is_empty() {
        output::success(&format!("{} is up to date", env));
        return Ok(());
    }

    output::header(&format!("Changes for {}", env));
    prompt::summary(&changes);

    let apply = if update {
        format!("dotenvx-ops encrypt {} --update", env)
    } else {
        format!("dotenvx-ops encrypt {}", env)
    };
    output::hint(&format!("run: {}", apply));
    Ok(())
}
