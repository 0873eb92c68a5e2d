//! Envs command.

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// List configured environments and their files.
pub fn execute(config: &Config) -> Result<()> {
    output::header("Environments");

    let width = config.envs.keys().map(String::len).max().unwrap_or(0);
    for name in config.env_names() {
        let paths = config.paths(&name)?;
        let status = if paths.enc.is_file() {
            "encrypted"
        } else {
            "not encrypted"
        };
        println!(
            "  {:<width$}  {}  {}",
            name,
            output::path(config.relative(&paths.plain).display()),
            status,
            width = width
        );
    }

    Ok(())
}
