//! ChangeSet type.
//!
//! Key-level comparison between a plaintext source and a decrypted working
//! copy. Reconciliation only ever adds or updates keys; keys that exist only
//! in the working copy are never reported, so a deletion in the plaintext is
//! never propagated to the encrypted artifact.

use super::env::{is_metadata_key, KvMap};

/// Keys to add to, and keys to rewrite in, a working copy.
///
/// `new` and `changed` are disjoint and both follow the source's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    new: KvMap,
    changed: KvMap,
}

impl ChangeSet {
    /// Keys present in `source` but missing from `target`.
    ///
    /// Value differences on shared keys are ignored.
    pub fn additive(source: &KvMap, target: &KvMap) -> Self {
        Self::compute(source, target, false)
    }

    /// Keys missing from `target` plus keys whose values differ.
    ///
    /// Values are compared with exact string equality.
    pub fn full(source: &KvMap, target: &KvMap) -> Self {
        Self::compute(source, target, true)
    }

    fn compute(source: &KvMap, target: &KvMap, with_changed: bool) -> Self {
        let mut changes = Self::default();

        for (key, value) in source.iter().filter(|(k, _)| !is_metadata_key(k)) {
            match target.get(key) {
                None => changes.new.insert(key, value),
                Some(current) if with_changed && current != value => {
                    changes.changed.insert(key, value)
                }
                Some(_) => {}
            }
        }

        changes
    }

    /// Keys to be added.
    pub fn new_entries(&self) -> &KvMap {
        &self.new
    }

    /// Keys whose values will be replaced.
    pub fn changed_entries(&self) -> &KvMap {
        &self.changed
    }

    /// Everything to append to the working copy: new keys, then changed keys.
    pub fn entries_to_append(&self) -> KvMap {
        self.new.iter().chain(self.changed.iter()).collect()
    }

    /// Total number of keys touched.
    pub fn len(&self) -> usize {
        self.new.len() + self.changed.len()
    }

    /// Whether there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.changed.is_empty()
    }
}
