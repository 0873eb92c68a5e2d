//! Pre- and post-condition checks on env files.

use std::path::Path;

use tracing::debug;

use crate::core::domain::{is_metadata_key, KvMap};
use crate::error::{Result, ValidationError};

/// Fail on the first path that does not exist.
///
/// # Errors
///
/// Returns `ValidationError::MissingFile` naming the missing path.
pub fn validate_files<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ValidationError::MissingFile(path.to_path_buf()).into());
        }
    }

    Ok(())
}

/// Assert every user value in `path` is encrypted.
///
/// A value counts as encrypted when it starts with `prefix` (after optional
/// surrounding quotes). Metadata keys are exempt since dotenvx stores its
/// public key in the clear. An empty file passes.
///
/// # Errors
///
/// Returns `ValidationError::PlaintextValues` listing offending keys, or an
/// I/O error if the file cannot be read.
pub fn ensure_encrypted_values(path: &Path, prefix: &str) -> Result<()> {
    let map = KvMap::load(path)?;

    let plaintext: Vec<String> = map
        .iter()
        .filter(|(key, value)| !is_metadata_key(key) && !value.starts_with(prefix))
        .map(|(key, _)| key.to_string())
        .collect();

    if !plaintext.is_empty() {
        return Err(ValidationError::PlaintextValues {
            path: path.to_path_buf(),
            keys: plaintext,
        }
        .into());
    }

    debug!(path = %path.display(), entries = map.len(), "all values encrypted");
    Ok(())
}
