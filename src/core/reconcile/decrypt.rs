//! Decrypt and pull operations.

use tracing::{debug, info};

use super::staging::WorkingCopy;
use super::{Confirm, Reconciler};
use crate::core::backend::Backend;
use crate::core::domain::DecryptReport;
use crate::core::mutate::strip_metadata_view;
use crate::core::paths::EnvPaths;
use crate::core::validation::validate_files;
use crate::error::Result;

impl<'a, B: Backend, C: Confirm> Reconciler<'a, B, C> {
    /// Write the metadata-free decrypted view of `env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown environment,
    /// `ValidationError::MissingFile` when the artifact or key file is
    /// missing, and `BackendError` when dotenvx fails.
    pub fn decrypt(&self, env: &str) -> Result<DecryptReport> {
        self.export(env, false)
    }

    /// Like [`decrypt`](Self::decrypt), then overwrite the plaintext file
    /// with the view. Local edits to the plaintext are lost.
    ///
    /// # Errors
    ///
    /// Same as `decrypt`, plus I/O errors writing the plaintext.
    pub fn pull(&self, env: &str) -> Result<DecryptReport> {
        self.export(env, true)
    }

    fn export(&self, env: &str, apply: bool) -> Result<DecryptReport> {
        info!(env, apply, "decrypting");

        let paths = self.config.paths(env)?;
        self.config.ensure_gitignore()?;

        let result = self.run_export(&paths, apply);
        self.settle(&paths.enc, result)
    }

    fn run_export(&self, paths: &EnvPaths, apply: bool) -> Result<DecryptReport> {
        validate_files(&[&paths.key, &paths.enc])?;

        let report = {
            let work = WorkingCopy::stage(&paths.enc, &paths.work)?;
            self.backend.decrypt(work.path(), &paths.key)?;
            debug!(backend = self.backend.name(), "decrypted working copy");

            let entries = strip_metadata_view(work.path(), &paths.latest)?;
            info!(path = %paths.latest.display(), entries, "wrote decrypted view");

            if apply {
                if let Some(dir) = paths.plain.parent() {
                    std::fs::create_dir_all(dir)?;
                }
                std::fs::copy(&paths.latest, &paths.plain)?;
                info!(path = %paths.plain.display(), "applied to plaintext");
            }

            DecryptReport {
                latest: paths.latest.clone(),
                entries,
                pulled: apply,
            }
        };
        info!("cleaned up working copy");

        Ok(report)
    }
}
