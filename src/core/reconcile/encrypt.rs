//! Encrypt operations.
//!
//! Folds new (and, in update mode, changed) plaintext values into the
//! encrypted artifact.

use std::path::Path;

use tracing::{debug, info};

use super::staging::WorkingCopy;
use super::{Confirm, Mode, Reconciler};
use crate::core::backend::Backend;
use crate::core::domain::{ChangeSet, EncryptOutcome, KvMap};
use crate::core::mutate::{append_entries, remove_keys};
use crate::core::paths::EnvPaths;
use crate::core::validation::{ensure_encrypted_values, validate_files};
use crate::error::Result;

impl<'a, B: Backend, C: Confirm> Reconciler<'a, B, C> {
    /// Reconcile the plaintext of `env` into its encrypted artifact.
    ///
    /// The first run (no artifact yet) encrypts the plaintext file as is.
    /// Later runs decrypt a working copy of the artifact, append what the
    /// plaintext adds, and in [`Mode::Update`] move changed keys to the end
    /// with their new values once [`Confirm`] approves.
    ///
    /// Keys removed from the plaintext stay in the artifact.
    ///
    /// # Returns
    ///
    /// `Applied` when the artifact was replaced, `NoChanges` or `Cancelled`
    /// when it was left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown environment,
    /// `ValidationError::MissingFile` when the plaintext (or, once the
    /// artifact exists, the key file) is missing, and `BackendError` when
    /// dotenvx fails. The artifact is untouched in every error case except a
    /// failed post-commit check.
    pub fn encrypt(&self, env: &str, mode: Mode) -> Result<EncryptOutcome> {
        info!(env, ?mode, "encrypting");

        let paths = self.config.paths(env)?;
        self.config.ensure_gitignore()?;

        let result = self.run_encrypt(&paths, mode);
        self.settle(&paths.enc, result)
    }

    fn run_encrypt(&self, paths: &EnvPaths, mode: Mode) -> Result<EncryptOutcome> {
        let first_run = is_first_run(paths.enc.as_path());
        if first_run {
            validate_files(&[&paths.plain])?;
        } else {
            validate_files(&[&paths.plain, &paths.enc, &paths.key])?;
        }
        debug!(first_run, "validated");

        let plain = KvMap::load(&paths.plain)?;

        let outcome = if first_run {
            self.first_run(paths, &plain)?
        } else {
            self.update(paths, &plain, mode)?
        };
        info!("cleaned up working copy");

        Ok(outcome)
    }

    /// Show what [`encrypt`](Self::encrypt) would apply, without applying it.
    ///
    /// # Errors
    ///
    /// Same validation and backend errors as `encrypt`.
    pub fn preview(&self, env: &str, mode: Mode) -> Result<ChangeSet> {
        let paths = self.config.paths(env)?;

        if is_first_run(&paths.enc) {
            validate_files(&[&paths.plain])?;
            let plain = KvMap::load(&paths.plain)?;
            return Ok(ChangeSet::additive(&plain, &KvMap::new()));
        }

        validate_files(&[&paths.plain, &paths.enc, &paths.key])?;
        let plain = KvMap::load(&paths.plain)?;

        let work = WorkingCopy::stage(&paths.enc, &paths.work)?;
        self.backend.decrypt(work.path(), &paths.key)?;
        let current = KvMap::load(work.path())?;

        Ok(mode.diff(&plain, &current))
    }

    fn first_run(&self, paths: &EnvPaths, plain: &KvMap) -> Result<EncryptOutcome> {
        if let Some(dir) = paths.enc.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&paths.enc, "")?;
        info!(path = %paths.enc.display(), "created empty encrypted env file");

        // The working copy is the plaintext itself, so every key is new and
        // there is nothing to append.
        let work = WorkingCopy::stage(&paths.plain, &paths.work)?;
        debug!("staged plaintext");

        let changes = ChangeSet::additive(plain, &KvMap::new());
        if changes.is_empty() {
            info!("plaintext has no entries, skipped encrypt");
            return Ok(EncryptOutcome::NoChanges);
        }

        self.seal(paths, work)?;
        Ok(EncryptOutcome::Applied(changes))
    }

    fn update(&self, paths: &EnvPaths, plain: &KvMap, mode: Mode) -> Result<EncryptOutcome> {
        let work = WorkingCopy::stage(&paths.enc, &paths.work)?;
        debug!("staged artifact");

        self.backend.decrypt(work.path(), &paths.key)?;
        debug!(backend = self.backend.name(), "decrypted working copy");

        let current = KvMap::load(work.path())?;
        let changes = mode.diff(plain, &current);
        debug!(
            new = changes.new_entries().len(),
            changed = changes.changed_entries().len(),
            "diffed"
        );

        if changes.is_empty() {
            info!("no changes, skipped re-encrypt");
            return Ok(EncryptOutcome::NoChanges);
        }

        let changed = changes.changed_entries();
        if mode == Mode::Update && !changed.is_empty() && !self.confirm.confirm(&changes)? {
            info!("cancelled");
            return Ok(EncryptOutcome::Cancelled(changes));
        }

        if !changed.is_empty() {
            remove_keys(changed.keys(), work.path())?;
        }
        append_entries(&changes.entries_to_append(), work.path())?;
        debug!("applied");

        self.seal(paths, work)?;
        Ok(EncryptOutcome::Applied(changes))
    }

    /// Encrypt the working copy, check it, and move it over the artifact.
    fn seal(&self, paths: &EnvPaths, work: WorkingCopy) -> Result<()> {
        self.backend.encrypt(work.path(), &paths.key)?;
        info!(backend = self.backend.name(), "encrypted env file");

        ensure_encrypted_values(work.path(), &self.config.encrypted_prefix)?;

        work.commit(&paths.enc)?;
        info!(path = %paths.enc.display(), "updated encrypted env file");

        Ok(())
    }
}

/// No artifact, or an empty one left by a first run that failed before
/// commit. Either way there is nothing to decrypt.
fn is_first_run(enc: &Path) -> bool {
    std::fs::metadata(enc).map(|m| m.len() == 0).unwrap_or(true)
}
