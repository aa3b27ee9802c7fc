//! Configuration module for note cleaning
//!
//! This module provides the `CleanConfig` struct, its builder and JSON
//! loading. Defaults match the note editor's export styles.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::CleanConfigBuilder;
pub use types::CleanConfig;
