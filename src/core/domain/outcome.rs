use std::path::PathBuf;

use super::diff::ChangeSet;

/// Result of an encrypt reconciliation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptOutcome {
    /// Changes were applied and the encrypted artifact replaced.
    Applied(ChangeSet),
    /// Nothing to apply; the artifact was left untouched.
    NoChanges,
    /// The user declined the update; the artifact was left untouched.
    Cancelled(ChangeSet),
}

impl EncryptOutcome {
    /// Whether the encrypted artifact was rewritten.
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Result of a decrypt or pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptReport {
    /// The metadata-free view that was written.
    pub latest: PathBuf,
    /// Number of user entries in the view.
    pub entries: usize,
    /// Whether the view was copied over the plaintext file.
    pub pulled: bool,
}
