//! Pkgsum: Deterministic Directory Checksum Manifests
//!
//! Builds a reproducible per-file checksum manifest for a package directory,
//! aggregates it into a single global hash, and verifies a tree against a
//! previously written baseline.

pub mod cli;
pub mod error;
pub mod hash;
pub mod lister;
pub mod logging;
pub mod manifest;
pub mod progress;
