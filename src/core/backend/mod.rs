//! Encryption backends.
//!
//! The reconciler never encrypts anything itself; it hands a file path and a
//! key file to a [`Backend`], which rewrites the file in place.
//!
//! ## Backends
//!
//! - **dotenvx**: runs the `dotenvx` CLI as a subprocess.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Backend` trait
//! 2. Add the implementation in a new file next to `dotenvx.rs`
//! 3. Re-export from this module

use std::path::Path;

use crate::error::Result;

mod dotenvx;

pub use dotenvx::Dotenvx;

/// In-place file encryption.
///
/// Both operations mutate the file at `path` using the key material at
/// `key_path`. A failure must leave no assumption about the file's content;
/// the reconciler only ever points a backend at a disposable working copy.
pub trait Backend {
    /// Encrypt every value of the env file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the tool is missing or exits non-zero.
    fn encrypt(&self, path: &Path, key_path: &Path) -> Result<()>;

    /// Decrypt every value of the env file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the key is wrong or the file is not valid
    /// ciphertext.
    fn decrypt(&self, path: &Path, key_path: &Path) -> Result<()>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn encrypt(&self, path: &Path, key_path: &Path) -> Result<()> {
        (**self).encrypt(path, key_path)
    }

    fn decrypt(&self, path: &Path, key_path: &Path) -> Result<()> {
        (**self).decrypt(path, key_path)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
