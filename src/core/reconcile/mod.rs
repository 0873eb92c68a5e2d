//! Reconciliation between plaintext env files and their encrypted artifacts.
//!
//! [`Reconciler`] owns the sequencing; everything it mutates goes through a
//! [`WorkingCopy`](staging::WorkingCopy) that is removed on every exit path,
//! and the encrypted artifact is only ever replaced atomically.
//!
//! ```text
//! encrypt: validate → stage → decrypt → diff → (confirm) → apply → encrypt → commit → clean
//! decrypt: validate → stage → decrypt → strip metadata → (pull) → clean
//! ```

mod decrypt;
mod encrypt;
mod staging;

use std::path::Path;

use tracing::warn;

use crate::core::backend::Backend;
use crate::core::config::Config;
use crate::core::domain::{ChangeSet, KvMap};
use crate::core::validation::ensure_encrypted_values;
use crate::error::Result;

/// How the plaintext is compared against the decrypted artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Only add keys missing from the artifact.
    #[default]
    Additive,
    /// Also rewrite keys whose values changed, after confirmation.
    Update,
}

impl Mode {
    /// Compute the change set for this mode.
    pub fn diff(self, plain: &KvMap, current: &KvMap) -> ChangeSet {
        match self {
            Self::Additive => ChangeSet::additive(plain, current),
            Self::Update => ChangeSet::full(plain, current),
        }
    }
}

/// Approval for overwriting existing values.
///
/// Asked only in [`Mode::Update`] when at least one existing key would get a
/// new value. Returning `false` cancels the whole operation.
pub trait Confirm {
    /// Decide whether `changes` may be applied.
    ///
    /// # Errors
    ///
    /// Returns error if the answer could not be obtained.
    fn confirm(&self, changes: &ChangeSet) -> Result<bool>;
}

impl<C: Confirm + ?Sized> Confirm for &C {
    fn confirm(&self, changes: &ChangeSet) -> Result<bool> {
        (**self).confirm(changes)
    }
}

/// Approve every change without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _changes: &ChangeSet) -> Result<bool> {
        Ok(true)
    }
}

/// Decline every overwrite.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl Confirm for AlwaysDecline {
    fn confirm(&self, _changes: &ChangeSet) -> Result<bool> {
        Ok(false)
    }
}

/// Runs encrypt, decrypt, pull and preview operations for one project.
pub struct Reconciler<'a, B, C> {
    config: &'a Config,
    backend: B,
    confirm: C,
}

impl<'a, B: Backend, C: Confirm> Reconciler<'a, B, C> {
    /// Create a reconciler.
    pub fn new(config: &'a Config, backend: B, confirm: C) -> Self {
        Self {
            config,
            backend,
            confirm,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Check that `enc` holds only encrypted values once an operation ends,
    /// whether it succeeded or not.
    ///
    /// A failed check wins over the operation's own error, which is logged.
    /// On the error path a missing artifact is not checked.
    fn settle<T>(&self, enc: &Path, result: Result<T>) -> Result<T> {
        let prefix = &self.config.encrypted_prefix;
        match result {
            Ok(value) => {
                ensure_encrypted_values(enc, prefix)?;
                Ok(value)
            }
            Err(err) if enc.is_file() => match ensure_encrypted_values(enc, prefix) {
                Ok(()) => Err(err),
                Err(check) => {
                    warn!(error = %err, "operation failed before the encrypted file check");
                    Err(check)
                }
            },
            Err(err) => Err(err),
        }
    }
}
