//! In-process stand-in for the dotenvx CLI.
//!
//! Values are "encrypted" by hex encoding them behind the `encrypted:`
//! marker, and a public key header is added the way dotenvx adds one.
//! Failures can be injected per operation.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use dotenvx_ops::core::backend::Backend;
use dotenvx_ops::core::domain::{is_metadata_key, split_entry};
use dotenvx_ops::error::{BackendError, Error, Result};

pub const ENCRYPTED_PREFIX: &str = "encrypted:";

const HEADER: &str = "#/-------------------[DOTENV_PUBLIC_KEY]--------------------/\n\
                      #/            public-key encryption for .env files          /\n\
                      #/----------------------------------------------------------/\n";

/// Mock backend with injectable failures and call counters.
#[derive(Debug, Default)]
pub struct MockBackend {
    fail_encrypt: bool,
    fail_decrypt: bool,
    leak_plaintext: bool,
    encrypts: Cell<usize>,
    decrypts: Cell<usize>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every encrypt exits non-zero.
    pub fn failing_encrypt() -> Self {
        Self {
            fail_encrypt: true,
            ..Self::default()
        }
    }

    /// Every decrypt exits non-zero.
    pub fn failing_decrypt() -> Self {
        Self {
            fail_decrypt: true,
            ..Self::default()
        }
    }

    /// Encrypt "succeeds" without encrypting anything.
    pub fn leaking() -> Self {
        Self {
            leak_plaintext: true,
            ..Self::default()
        }
    }

    pub fn encrypts(&self) -> usize {
        self.encrypts.get()
    }

    pub fn decrypts(&self) -> usize {
        self.decrypts.get()
    }
}

impl Backend for MockBackend {
    fn encrypt(&self, path: &Path, key_path: &Path) -> Result<()> {
        self.encrypts.set(self.encrypts.get() + 1);
        if self.fail_encrypt {
            return Err(failed("encrypt"));
        }

        let env = env_name(key_path);
        if !key_path.exists() {
            fs::create_dir_all(key_path.parent().unwrap())?;
            fs::write(key_path, format!("DOTENV_PRIVATE_KEY_{}=\"mock\"\n", env))?;
        }
        if self.leak_plaintext {
            return Ok(());
        }

        let contents = fs::read_to_string(path)?;
        let mut out = String::new();
        if !contents.contains("DOTENV_PUBLIC_KEY") {
            out.push_str(HEADER);
            out.push_str(&format!("DOTENV_PUBLIC_KEY_{}=\"{}\"\n\n", env, hex(&env)));
        }
        for line in contents.split_inclusive('\n') {
            out.push_str(&rewrite(line, |value| {
                if value.starts_with(ENCRYPTED_PREFIX) {
                    None
                } else {
                    Some(format!("{}{}", ENCRYPTED_PREFIX, hex(value)))
                }
            }));
        }

        fs::write(path, out)?;
        Ok(())
    }

    fn decrypt(&self, path: &Path, key_path: &Path) -> Result<()> {
        self.decrypts.set(self.decrypts.get() + 1);
        if self.fail_decrypt || !key_path.is_file() {
            return Err(failed("decrypt"));
        }

        let contents = fs::read_to_string(path)?;
        let out: String = contents
            .split_inclusive('\n')
            .map(|line| {
                rewrite(line, |value| {
                    value.strip_prefix(ENCRYPTED_PREFIX).and_then(unhex)
                })
            })
            .collect();

        fs::write(path, out)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn failed(operation: &'static str) -> Error {
    BackendError::Failed {
        operation,
        status: "exit status: 1".to_string(),
        stderr: format!("[MOCK] {} failed", operation),
    }
    .into()
}

/// Environment name in upper case, from a `.env.keys.<env>` path.
fn env_name(key_path: &Path) -> String {
    key_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(".env.keys."))
        .unwrap_or("default")
        .to_uppercase()
}

/// Replace the value of a user entry line, keeping its terminator.
fn rewrite(line: &str, f: impl Fn(&str) -> Option<String>) -> String {
    match split_entry(line) {
        Some((key, raw)) if !is_metadata_key(key) => {
            let eol = if raw.ends_with("\r\n") {
                "\r\n"
            } else if raw.ends_with('\n') {
                "\n"
            } else {
                ""
            };
            match f(unquote(raw)) {
                Some(value) => format!("{}=\"{}\"{}", key, value, eol),
                None => line.to_string(),
            }
        }
        _ => line.to_string(),
    }
}

fn unquote(raw: &str) -> &str {
    let value = raw.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

pub fn hex(s: &str) -> String {
    s.bytes().map(|b| format!("{:02x}", b)).collect()
}

pub fn unhex(hex: &str) -> Option<String> {
    if !hex.is_ascii() || hex.len() % 2 != 0 {
        return None;
    }
    let bytes: std::result::Result<Vec<u8>, _> = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect();
    String::from_utf8(bytes.ok()?).ok()
}
