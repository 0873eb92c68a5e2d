//! Command helper methods for Project.

use super::{Project, FAKE_DOTENVX};
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

impl Project {
    /// Create a dotenvx-ops command running in the project root.
    ///
    /// Color and log output are disabled so assertions see plain text.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("dotenvx-ops").expect("failed to find dotenvx-ops binary");
        cmd.env("NO_COLOR", "1");
        cmd.env("DOTENVX_OPS_LOG", "off");
        cmd.current_dir(self.root());
        cmd
    }

    /// Install the fake dotenvx script and point the config at it.
    #[cfg(unix)]
    pub fn with_fake_dotenvx(self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script: PathBuf = self.root().join("bin/dotenvx");
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, FAKE_DOTENVX).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        fs::write(
            self.root().join("dotenvx-ops.toml"),
            format!("dotenvx = \"{}\"\n", script.display()),
        )
        .unwrap();

        self
    }
}
