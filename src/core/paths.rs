//! Per-environment file locations.

use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::constants::KEYS_FILE_PREFIX;

/// Every file involved in reconciling one environment, root-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvPaths {
    /// Environment name.
    pub env: String,
    /// Plaintext env file, the source of truth for new values.
    pub plain: PathBuf,
    /// Encrypted artifact.
    pub enc: PathBuf,
    /// dotenvx key file.
    pub key: PathBuf,
    /// Transient working copy.
    pub work: PathBuf,
    /// Metadata-free decrypted view.
    pub latest: PathBuf,
}

impl EnvPaths {
    /// Derive the paths for `env`, whose plaintext file is `plain`.
    ///
    /// The artifact, working copy and view reuse the plaintext's file name
    /// in their own directories; the key file is `.env.keys.<env>`.
    pub fn resolve(config: &Config, env: &str, plain: &Path) -> Self {
        let root = config.root();
        let file_name = plain
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!(".env.{}", env)));

        Self {
            env: env.to_string(),
            plain: root.join(plain),
            enc: root.join(&config.enc_dir).join(&file_name),
            key: root
                .join(config.keys_dir())
                .join(format!("{}{}", KEYS_FILE_PREFIX, env)),
            work: root.join(&config.work_dir).join(&file_name),
            latest: root.join(config.latest_dir()).join(&file_name),
        }
    }
}
