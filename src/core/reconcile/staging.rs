//! Working copy lifecycle and atomic commit.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::mutate::write_private;
use crate::error::Result;

/// A transient copy of an env file, removed when dropped.
///
/// The guard exists before the first byte is written, so a half-written copy
/// is cleaned up too. Removal failures are logged and swallowed.
#[derive(Debug)]
pub(super) struct WorkingCopy {
    path: PathBuf,
}

impl WorkingCopy {
    /// Copy `source` into a fresh working copy at `work`.
    ///
    /// A stale copy left behind by a killed process is overwritten.
    pub(super) fn stage(source: &Path, work: &Path) -> Result<Self> {
        let copy = Self {
            path: work.to_path_buf(),
        };

        let contents = std::fs::read(source)?;
        write_private(&copy.path, &contents)?;
        debug!(from = %source.display(), to = %work.display(), "staged working copy");

        Ok(copy)
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    /// Replace `target` with this working copy.
    ///
    /// A rename is tried first. If that fails (typically because the working
    /// directory is on another filesystem) the bytes go to a temporary file
    /// next to `target` which is fsynced and then renamed over it. Either
    /// way `target` is never observed half written.
    pub(super) fn commit(self, target: &Path) -> Result<()> {
        if std::fs::rename(&self.path, target).is_ok() {
            debug!(target = %target.display(), "committed by rename");
            return Ok(());
        }

        let dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let contents = std::fs::read(&self.path)?;

        let mut staged = tempfile::NamedTempFile::new_in(&dir)?;
        staged.write_all(&contents)?;
        staged.flush()?;
        staged.as_file().sync_all()?;
        staged.persist(target).map_err(|e| e.error)?;

        debug!(target = %target.display(), "committed by copy");
        Ok(())
    }
}

impl Drop for WorkingCopy {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed working copy"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove working copy"
            ),
        }
    }
}
