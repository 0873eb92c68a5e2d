//! Init command.

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::error::Result;

/// Write a default config and create the env directories.
pub fn execute(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let json = root.join(constants::CONFIG_JSON);

    let config = Config::init(&root, force)?;
    info!(root = %root.display(), "initialized");

    output::success(&format!("initialized {}", output::path(constants::CONFIG_TOML)));
    if json.is_file() {
        output::warn(&format!(
            "{} takes precedence over {}",
            constants::CONFIG_JSON,
            constants::CONFIG_TOML
        ));
    }

    output::kv("env_dir: ", config.env_dir.display());
    output::kv("enc_dir: ", config.enc_dir.display());
    output::kv("keys_dir:", config.keys_dir().display());
    Ok(())
}
