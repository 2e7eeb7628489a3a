//! Infrastructure layer: platform-specific utilities.
//!
//! Holds the pieces that know about the Zellij sandbox environment rather
//! than the application domain.
//!
//! # Organization
//!
//! - [`paths`]: Sandbox path resolution for the diagnostics directory

pub mod paths;

pub use paths::get_data_dir;
