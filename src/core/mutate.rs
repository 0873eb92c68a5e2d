//! In-place edits of env files.
//!
//! All operations work line by line on the raw text so that comments, blank
//! lines and the file's line terminators survive untouched.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::core::domain::{format_value, is_metadata_key, split_entry, KvMap};
use crate::error::Result;

/// Line terminator used by `text`, judged from its first line.
fn line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(i) if text[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn read_or_empty(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Write a file readable only by its owner.
///
/// Decrypted env files hold secrets, so they get 0600 on Unix even when an
/// existing file is overwritten.
pub fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(contents)?;
        file.flush()?;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents)?;
    }

    Ok(())
}

/// Append `key=value` lines for every entry, in the mapping's order.
///
/// Values are quoted where needed so they parse back unchanged. The file is
/// created if missing. A last line without terminator gets one
/// first so the new entries never merge into it.
///
/// # Errors
///
/// Returns error if the file cannot be read or appended to.
pub fn append_entries(entries: &KvMap, path: &Path) -> Result<()> {
    let existing = read_or_empty(path)?;
    let eol = line_ending(&existing);

    let mut buf = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        buf.push_str(eol);
    }
    for (key, value) in entries.iter() {
        buf.push_str(key);
        buf.push('=');
        buf.push_str(&format_value(value));
        buf.push_str(eol);
        info!(key, "added key");
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(buf.as_bytes())?;
    file.flush()?;

    Ok(())
}

/// Rewrite `path` without the entry lines whose key is in `keys`.
///
/// Every other line, comments and blanks included, is kept byte for byte.
/// Returns the number of lines removed.
///
/// # Errors
///
/// Returns error if the file cannot be read or written.
pub fn remove_keys<'a, I>(keys: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let keys: HashSet<&str> = keys.into_iter().collect();
    let contents = std::fs::read_to_string(path)?;

    let mut kept = String::with_capacity(contents.len());
    let mut removed = 0;
    for line in contents.split_inclusive('\n') {
        match split_entry(line) {
            Some((key, _)) if keys.contains(key) => removed += 1,
            _ => kept.push_str(line),
        }
    }

    std::fs::write(path, kept)?;
    debug!(removed, path = %path.display(), "removed keys");

    Ok(removed)
}

/// Copy `source` to `dest` as a clean, human-readable view.
///
/// Comments, blanks and stray lines before the first real entry are dropped;
/// after it everything is kept verbatim. Metadata entries are dropped
/// wherever they appear. Returns the number of entries written.
///
/// # Errors
///
/// Returns error if the source cannot be read or the destination written.
pub fn strip_metadata_view(source: &Path, dest: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(source)?;

    let mut view = String::with_capacity(contents.len());
    let mut started = false;
    let mut entries = 0;
    for line in contents.split_inclusive('\n') {
        match split_entry(line) {
            Some((key, _)) if is_metadata_key(key) => {}
            Some(_) => {
                started = true;
                entries += 1;
                view.push_str(line);
            }
            None if started => view.push_str(line),
            None => {}
        }
    }

    write_private(dest, view.as_bytes())?;
    debug!(entries, dest = %dest.display(), "wrote metadata-free view");

    Ok(entries)
}
