//! Shared configuration library for Folio.
//!
//! This crate resolves the gallery configuration (explicit path, environment,
//! or built-in defaults) and hosts the command definitions used by the
//! `folio` binary, so tests and the binary agree on one set of defaults.

pub mod cli;
pub mod loader;
pub mod models;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{ConfigSource, GalleryConfig};
