//! dotenvx backend.
//!
//! Encrypts env files with the dotenvx CLI (https://dotenvx.com).
//!
//! ## Requirements
//!
//! - `dotenvx` must be installed and on `PATH` (or configured explicitly)
//! - Decryption needs the environment's key file; encryption creates it
//!   on first use
//!
//! ## Usage
//!
//! ```toml
//! # dotenvx-ops.toml
//! dotenvx = "/usr/local/bin/dotenvx"
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::Backend;
use crate::core::config::Config;
use crate::error::{BackendError, Result};

/// dotenvx backend using the dotenvx CLI.
#[derive(Debug, Clone)]
pub struct Dotenvx {
    program: String,
}

impl Dotenvx {
    /// Backend invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Backend invoking the command named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dotenvx.clone())
    }

    /// Resolve the program to an executable path.
    fn locate(&self) -> Result<PathBuf> {
        let program = which::which(&self.program)
            .map_err(|_| BackendError::NotFound(self.program.clone()))?;
        Ok(program)
    }

    fn run(&self, operation: &'static str, path: &Path, key_path: &Path) -> Result<()> {
        let program = self.locate()?;
        trace!(
            program = %program.display(),
            operation,
            path = %path.display(),
            key = %key_path.display(),
            "running dotenvx"
        );

        let output = Command::new(&program)
            .arg(operation)
            .arg("-f")
            .arg(path)
            .arg("-fk")
            .arg(key_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| BackendError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BackendError::Failed {
                operation,
                status: output.status.to_string(),
                stderr,
            }
            .into());
        }

        debug!(operation, path = %path.display(), "dotenvx finished");
        Ok(())
    }
}

impl Default for Dotenvx {
    fn default() -> Self {
        Self::new(crate::core::constants::DOTENVX)
    }
}

impl Backend for Dotenvx {
    fn encrypt(&self, path: &Path, key_path: &Path) -> Result<()> {
        if let Some(parent) = key_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.run("encrypt", path, key_path)
    }

    fn decrypt(&self, path: &Path, key_path: &Path) -> Result<()> {
        self.run("decrypt", path, key_path)
    }

    fn name(&self) -> &'static str {
        "dotenvx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program() {
        let tmp = TempDir::new().unwrap();
        let backend = Dotenvx::new("dotenvx-ops-test-no-such-program");

        match backend.decrypt(&tmp.path().join(".env"), &tmp.path().join("keys")) {
            Err(Error::Backend(BackendError::NotFound(program))) => {
                assert_eq!(program, "dotenvx-ops-test-no-such-program")
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failure() {
        let tmp = TempDir::new().unwrap();
        let backend = Dotenvx::new("false");

        match backend.decrypt(&tmp.path().join(".env"), &tmp.path().join("keys")) {
            Err(Error::Backend(BackendError::Failed { operation, .. })) => {
                assert_eq!(operation, "decrypt")
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success_and_creates_key_dir() {
        let tmp = TempDir::new().unwrap();
        let key = tmp.path().join("envs/keys/.env.keys.production");
        let backend = Dotenvx::new("true");

        backend.encrypt(&tmp.path().join(".env"), &key).unwrap();

        assert!(tmp.path().join("envs/keys").is_dir());
    }
}
