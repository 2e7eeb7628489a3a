//! Domain layer for the Memefinder plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. It keeps the business
//! vocabulary (memes, errors) isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`meme`]: Meme domain model

pub mod error;
pub mod meme;

pub use error::{MemefinderError, Result};
pub use meme::Meme;
