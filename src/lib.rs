//! dotenvx-ops - keep plaintext env files in sync with their dotenvx-encrypted
//! counterparts.
//!
//! Plaintext files are the source of truth for new keys. The encrypted file
//! only grows from them (or, on request, takes their changed values), and
//! `decrypt`/`pull` export its contents back without dotenvx metadata.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Fold plaintext changes into the encrypted file
//! │   ├── decrypt       # decrypt and pull
//! │   ├── diff          # Read-only change preview
//! │   ├── prompt        # Interactive confirmation
//! │   ├── init          # Write config and create directories
//! │   ├── envs          # List environments
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # dotenvx-ops.json / dotenvx-ops.toml
//!     ├── paths         # Per-environment file locations
//!     ├── domain/       # KvMap parser, ChangeSet diff, outcomes
//!     ├── mutate        # Line-preserving file edits
//!     ├── validation    # Pre- and post-condition checks
//!     ├── backend/      # Encryption backends
//!     │   ├── mod       # Backend trait
//!     │   └── dotenvx   # dotenvx CLI implementation
//!     └── reconcile/    # Orchestration over a self-cleaning working copy
//! ```

pub mod cli;
pub mod core;
pub mod error;
