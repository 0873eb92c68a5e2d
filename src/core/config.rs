//! Configuration file management.
//!
//! Reads `dotenvx-ops.json` or `dotenvx-ops.toml` from the project root,
//! falling back to defaults when neither exists. The loaded [`Config`] is
//! built once per invocation and passed by reference to everything else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::paths::EnvPaths;
use crate::error::{ConfigError, Result};

/// Project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the plaintext env files. Every entry of `envs`
    /// must live under it.
    pub env_dir: PathBuf,
    /// Directory holding the encrypted artifacts (committed to git).
    pub enc_dir: PathBuf,
    /// Directory for transient working copies.
    pub work_dir: PathBuf,
    /// Directory holding dotenvx key files. Defaults to `<env_dir>/keys`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_dir: Option<PathBuf>,
    /// Directory for decrypted views. Defaults to `<env_dir>/latest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_dir: Option<PathBuf>,
    /// Marker every encrypted value starts with.
    pub encrypted_prefix: String,
    /// Backend command.
    pub dotenvx: String,
    /// Environment name to plaintext env file.
    pub envs: BTreeMap<String, PathBuf>,
    /// Project root all relative paths are resolved against.
    #[serde(skip)]
    root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_dir: PathBuf::from(constants::ENV_DIR),
            envs: constants::DEFAULT_ENVS
                .iter()
                .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
                .collect(),
            enc_dir: PathBuf::from(constants::ENC_DIR),
            work_dir: PathBuf::from(constants::WORK_DIR),
            keys_dir: None,
            latest_dir: None,
            encrypted_prefix: constants::ENCRYPTED_PREFIX.to_string(),
            dotenvx: constants::DOTENVX.to_string(),
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load configuration from `root`.
    ///
    /// `dotenvx-ops.json` wins over `dotenvx-ops.toml`; with neither present
    /// the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a config file cannot be read or parsed, or
    /// if an env path lies outside `env_dir`.
    pub fn load_from(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let json = root.join(constants::CONFIG_JSON);
        let toml_path = root.join(constants::CONFIG_TOML);

        let mut config: Self = if json.is_file() {
            debug!(path = %json.display(), "loading json config");
            let contents = read(&json)?;
            serde_json::from_str(&contents)
                .map_err(|source| ConfigError::ParseJson { path: json, source })?
        } else if toml_path.is_file() {
            debug!(path = %toml_path.display(), "loading toml config");
            let contents = read(&toml_path)?;
            toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
                path: toml_path,
                source,
            })?
        } else {
            debug!("no config file, using defaults");
            Self::default()
        };

        config.root = root;
        config.validate()?;

        debug!(envs = config.envs.len(), "config loaded");
        Ok(config)
    }

    /// Use `root` as the project root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an existing config file, if any.
    pub fn existing_file(root: &Path) -> Option<PathBuf> {
        [constants::CONFIG_JSON, constants::CONFIG_TOML]
            .iter()
            .map(|name| root.join(name))
            .find(|p| p.is_file())
    }

    /// Write this configuration as `dotenvx-ops.toml` under the root.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.root.join(constants::CONFIG_TOML);
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(&path, contents)?;

        Ok(path)
    }

    /// Write a default configuration under `root` and create its directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if a config file exists and
    /// `force` is not set, or an I/O error if a write fails.
    pub fn init(root: impl Into<PathBuf>, force: bool) -> Result<Self> {
        let config = Self::default().with_root(root);

        if let Some(existing) = Self::existing_file(&config.root) {
            if !force {
                return Err(ConfigError::AlreadyInitialized(existing).into());
            }
            debug!(path = %existing.display(), "overwriting config");
        }

        config.save()?;
        for dir in [
            config.env_dir.clone(),
            config.enc_dir.clone(),
            config.keys_dir(),
            config.latest_dir(),
            config.work_dir.clone(),
        ] {
            std::fs::create_dir_all(config.root.join(dir))?;
        }
        config.ensure_gitignore()?;

        Ok(config)
    }

    /// Environment names, sorted by name whatever order they were configured in.
    pub fn env_names(&self) -> Vec<String> {
        self.envs.keys().cloned().collect()
    }

    /// Key file directory, root-relative.
    pub fn keys_dir(&self) -> PathBuf {
        self.keys_dir
            .clone()
            .unwrap_or_else(|| self.env_dir.join("keys"))
    }

    /// Decrypted view directory, root-relative.
    pub fn latest_dir(&self) -> PathBuf {
        self.latest_dir
            .clone()
            .unwrap_or_else(|| self.env_dir.join("latest"))
    }

    /// `path` relative to the project root, for display.
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Resolve every path involved in reconciling `env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownEnvironment` if `env` is not configured.
    pub fn paths(&self, env: &str) -> Result<EnvPaths> {
        let plain = self
            .envs
            .get(env)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                name: env.to_string(),
                known: self.env_names(),
            })?;

        Ok(EnvPaths::resolve(self, env, plain))
    }

    /// Entries `.gitignore` must contain so plaintext and working copies are
    /// never committed.
    pub fn gitignore_entries(&self) -> Vec<String> {
        [&self.env_dir, &self.work_dir]
            .iter()
            .map(|dir| {
                let dir = dir.to_string_lossy().replace('\\', "/");
                format!("{}/*", dir.trim_end_matches('/'))
            })
            .collect()
    }

    /// Ensure `.gitignore` in the project root lists [`gitignore_entries`].
    ///
    /// Missing entries are appended; existing content is left alone.
    /// Returns whether the file changed.
    ///
    /// # Errors
    ///
    /// Returns error if file operations fail.
    ///
    /// [`gitignore_entries`]: Config::gitignore_entries
    pub fn ensure_gitignore(&self) -> Result<bool> {
        let gitignore = self.root.join(constants::GITIGNORE);

        let existing = if gitignore.exists() {
            std::fs::read_to_string(&gitignore)?
        } else {
            String::new()
        };

        let mut updated = existing.clone();
        for entry in self.gitignore_entries() {
            if !existing.lines().any(|l| l.trim() == entry) {
                if !updated.is_empty() && !updated.ends_with('\n') {
                    updated.push('\n');
                }
                updated.push_str(&entry);
                updated.push('\n');
            }
        }

        if updated == existing {
            return Ok(false);
        }

        std::fs::write(&gitignore, updated)?;
        debug!(path = %gitignore.display(), "updated .gitignore");
        Ok(true)
    }

    /// Check that every env path lives under `env_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPaths` listing every offending entry.
    pub fn validate(&self) -> Result<()> {
        let invalid: Vec<String> = self
            .envs
            .iter()
            .filter(|(_, path)| !path.starts_with(&self.env_dir) || *path == &self.env_dir)
            .map(|(name, path)| format!("\"{}\": \"{}\"", name, path.display()))
            .collect();

        if !invalid.is_empty() {
            return Err(ConfigError::InvalidPaths {
                env_dir: self.env_dir.display().to_string(),
                invalid,
            }
            .into());
        }

        Ok(())
    }
}

fn read(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents)
}
