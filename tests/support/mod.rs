//! Test support utilities for dotenvx-ops integration tests.
//!
//! Provides an isolated project directory, an in-process backend and
//! helpers to inspect the files a reconciliation touches.

#![allow(dead_code)]

pub mod assertions;
pub mod backend;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use backend::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use dotenvx_ops::core::config::Config;
use dotenvx_ops::core::domain::{is_metadata_key, EncryptOutcome, KvMap};
use dotenvx_ops::core::paths::EnvPaths;
use dotenvx_ops::core::reconcile::{AssumeYes, Mode, Reconciler};

/// Project directory with the default layout.
///
/// Nothing touches the process working directory; the config carries the
/// root, and child commands use `.current_dir()`, so tests run in parallel.
pub struct Project {
    /// Temporary project root
    pub dir: TempDir,
    /// Configuration rooted at `dir`
    pub config: Config,
}

impl Project {
    /// Create a project with no config file, so the defaults apply.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let config = Config::load_from(dir.path()).expect("failed to load default config");

        Self { dir, config }
    }

    /// Create a project whose `env` has been encrypted once from `plain`.
    pub fn seeded(env: &str, plain: &str) -> Self {
        let p = Self::new();
        p.write_plain(env, plain);

        let outcome = p
            .encrypt(env, Mode::Additive, &MockBackend::new())
            .expect("first encrypt failed");
        assert!(outcome.was_applied(), "first encrypt was not applied");

        p
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self, env: &str) -> EnvPaths {
        self.config.paths(env).expect("unknown environment")
    }

    /// Encrypt with automatic approval.
    pub fn encrypt(
        &self,
        env: &str,
        mode: Mode,
        backend: &MockBackend,
    ) -> dotenvx_ops::error::Result<EncryptOutcome> {
        Reconciler::new(&self.config, backend, AssumeYes).encrypt(env, mode)
    }

    pub fn write_plain(&self, env: &str, contents: &str) {
        let path = self.paths(env).plain;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read_plain(&self, env: &str) -> String {
        fs::read_to_string(self.paths(env).plain).unwrap()
    }

    /// Raw bytes of the encrypted artifact.
    pub fn artifact(&self, env: &str) -> Vec<u8> {
        fs::read(self.paths(env).enc).expect("artifact missing")
    }

    /// Decoded user entries of the encrypted artifact, in file order.
    pub fn artifact_map(&self, env: &str) -> KvMap {
        let text = String::from_utf8(self.artifact(env)).unwrap();
        KvMap::parse(&text)
            .iter()
            .filter(|(key, _)| !is_metadata_key(key))
            .map(|(key, value)| {
                let hex = value
                    .strip_prefix(ENCRYPTED_PREFIX)
                    .unwrap_or_else(|| panic!("{} is not encrypted: {}", key, value));
                (key.to_string(), unhex(hex).expect("invalid mock ciphertext"))
            })
            .collect()
    }

    pub fn read_latest(&self, env: &str) -> String {
        fs::read_to_string(self.paths(env).latest).unwrap()
    }

    pub fn work_exists(&self, env: &str) -> bool {
        self.paths(env).work.exists()
    }
}
