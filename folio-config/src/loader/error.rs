//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why configuration could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The named config file does not exist.
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    /// The config file could not be read.
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`GalleryConfig`](crate::GalleryConfig).
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// No catalog location is configured.
    #[error("catalog_path must not be empty")]
    EmptyCatalogPath,
}
