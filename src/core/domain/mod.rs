//! Domain types.

mod diff;
mod env;
mod outcome;

pub use diff::ChangeSet;
pub use env::{format_value, is_metadata_key, split_entry, KvMap};
pub use outcome::{DecryptReport, EncryptOutcome};
