//! Core library components.
//!
//! The reconciliation engine and the thin glue around it: configuration,
//! path resolution, validation and the encryption backend.

pub mod backend;
pub mod config;
pub mod constants;
pub mod domain;
pub mod mutate;
pub mod paths;
pub mod reconcile;
pub mod validation;
