//! Constants used throughout dotenvx-ops.
//!
//! Centralizes magic strings and configuration defaults.

/// JSON configuration file name, checked first.
pub const CONFIG_JSON: &str = "dotenvx-ops.json";

/// TOML configuration file name.
pub const CONFIG_TOML: &str = "dotenvx-ops.toml";

/// Gitignore file maintained by `ensure_gitignore`.
pub const GITIGNORE: &str = ".gitignore";

/// Key prefix reserved for metadata injected by dotenvx (public keys etc).
pub const METADATA_PREFIX: &str = "DOTENV_";

/// Marker every encrypted value starts with.
pub const ENCRYPTED_PREFIX: &str = "encrypted:";

/// Default backend command.
pub const DOTENVX: &str = "dotenvx";

/// Default directory holding plaintext env files.
pub const ENV_DIR: &str = "envs";

/// Default directory holding encrypted artifacts.
pub const ENC_DIR: &str = "enc";

/// Default directory for transient working copies.
pub const WORK_DIR: &str = "tmp/dotenvx-ops";

/// Default environments and their plaintext files.
pub const DEFAULT_ENVS: &[(&str, &str)] = &[
    ("development", "envs/.env.development"),
    ("staging", "envs/.env.staging"),
    ("production", "envs/.env.production"),
];

/// Key file name prefix; the environment name is appended.
pub const KEYS_FILE_PREFIX: &str = ".env.keys.";
