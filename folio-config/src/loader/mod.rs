//! Resolves the effective [`GalleryConfig`].
//!
//! Lookup order:
//! 1) an explicit path (`--config`),
//! 2) `$FOLIO_CONFIG`,
//! 3) built-in defaults.
//!
//! `$FOLIO_CATALOG_PATH` and an explicit catalog override are applied on top
//! of whichever source won, explicit override first.

pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::models::{ConfigSource, GalleryConfig};
use error::ConfigLoadError;

/// Environment variable naming a config file.
pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG";
/// Environment variable overriding `catalog_path`.
pub const CATALOG_PATH_VAR: &str = "FOLIO_CATALOG_PATH";

/// Explicit inputs that outrank the environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Config file given on the command line.
    pub config_path: Option<PathBuf>,
    /// Catalog override given on the command line.
    pub catalog_path: Option<PathBuf>,
}

/// Resolves [`GalleryConfig`] from files and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// A resolved configuration and where it came from.
#[derive(Debug)]
pub struct ConfigLoad {
    /// Effective configuration.
    pub config: GalleryConfig,
    /// Where the configuration came from.
    pub source: ConfigSource,
}

impl ConfigLoader {
    /// Loader with no explicit inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with the given explicit inputs.
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Use `path` instead of `$FOLIO_CONFIG`.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Override the configured catalog path.
    pub fn with_catalog_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.catalog_path = Some(path.into());
        self
    }

    /// Resolve against the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_with_env(|key| env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn load_with_env<F>(&self, lookup: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (mut config, source) = if let Some(path) = &self.options.config_path {
            (read_config(path)?, ConfigSource::File(path.clone()))
        } else if let Some(raw) = non_blank(CONFIG_PATH_VAR) {
            let path = PathBuf::from(raw.trim());
            (read_config(&path)?, ConfigSource::EnvPath(path))
        } else {
            (GalleryConfig::default(), ConfigSource::Default)
        };

        if let Some(path) = &self.options.catalog_path {
            config.catalog_path = path.clone();
        } else if let Some(raw) = non_blank(CATALOG_PATH_VAR) {
            debug!(path = %raw.trim(), "catalog path overridden from environment");
            config.catalog_path = PathBuf::from(raw.trim());
        }

        validate(&config)?;
        info!(
            source = ?source,
            catalog = %config.catalog_path.display(),
            "gallery configuration resolved"
        );
        Ok(ConfigLoad { config, source })
    }
}

fn read_config(path: &Path) -> Result<GalleryConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    GalleryConfig::parse_toml(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(config: &GalleryConfig) -> Result<(), ConfigLoadError> {
    if config.catalog_path.as_os_str().is_empty() {
        return Err(ConfigLoadError::EmptyCatalogPath);
    }
    Ok(())
}
