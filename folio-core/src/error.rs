//! Error types for catalog loading and lookups.

use folio_model::EntryId;
use thiserror::Error;

/// Failures surfaced to callers as explicit result states.
///
/// Missing or malformed optional fields on individual entries are never an
/// error; they degrade to defaults during decoding.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document could not be read or parsed.
    #[error("Catalog unavailable from {origin}: {cause}")]
    CatalogUnavailable {
        /// Path or label of the document.
        origin: String,
        /// Underlying read or parse failure.
        #[source]
        cause: LoadFailure,
    },

    /// No entry carries the requested id.
    #[error("Artwork not found: {0}")]
    EntryNotFound(EntryId),
}

/// Why a catalog document could not be materialised.
#[derive(Error, Debug)]
pub enum LoadFailure {
    /// Reading the document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not a gallery document.
    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
