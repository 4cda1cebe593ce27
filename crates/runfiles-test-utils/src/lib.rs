//! Shared test utilities for the runfiles workspace.
//!
//! This crate provides temporary runfiles layouts so the library and CLI
//! test suites build manifests and runfiles trees the same way. It is a
//! dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestRunfiles`] builder for manifests, runfiles
//!   directories and program-adjacent layouts

pub mod tree;

pub use tree::TestRunfiles;
