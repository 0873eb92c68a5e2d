//! Interactive confirmation for overwriting encrypted values.

use std::io::{self, IsTerminal};

use tracing::debug;

use crate::cli::output;
use crate::core::domain::ChangeSet;
use crate::core::reconcile::Confirm;
use crate::error::Result;

/// Asks on the terminal before existing keys are overwritten.
///
/// Without a terminal on stdin there is nobody to ask, so the answer is no.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prompt;

impl Confirm for Prompt {
    fn confirm(&self, changes: &ChangeSet) -> Result<bool> {
        summary(changes);

        if !io::stdin().is_terminal() {
            output::warn("stdin is not a terminal, not applying updates");
            output::hint("pass --yes to apply without asking");
            return Ok(false);
        }

        let answer = dialoguer::Confirm::new()
            .with_prompt("Apply these changes?")
            .default(false)
            .interact()?;
        debug!(answer, "confirmation answered");

        Ok(answer)
    }
}

/// Print the `[NEW]` and `[UPDATE]` blocks for a change set.
pub fn summary(changes: &ChangeSet) {
    for key in changes.new_entries().keys() {
        output::added(key);
    }
    for key in changes.changed_entries().keys() {
        output::updated(key);
    }
}
