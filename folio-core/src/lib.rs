//! # Folio Core
//!
//! Query engine behind the Folio artwork gallery: it loads a static catalog
//! document and answers the questions the gallery and detail pages ask of it.
//!
//! ## Overview
//!
//! - **Catalog loading**: comment-tolerant JSON ingestion with explicit
//!   load-status reporting ([`source`])
//! - **Date resolution**: heterogeneous authored dates to comparable instants
//!   ([`query::dates`])
//! - **Tag vocabulary**: merged legacy category tokens and tag lists
//!   ([`query::tags`])
//! - **Filtering and sorting**: medium/tag filters and stable sort orders
//!   ([`query::filtering`], [`query::sorting`])
//! - **Related artworks**: curated and computed relevance ranking
//!   ([`query::related`])
//! - **Gallery state**: the filter state owned by one gallery view
//!   ([`query::engine`])
//! - **Commission requests**: the emailed message built from the commission
//!   form ([`commission`])
//!
//! The crate never produces markup; every operation returns plain data.
//!
//! ## Examples
//!
//! ```
//! use folio_core::query::prelude::*;
//! use folio_model::{Catalog, CatalogEntry};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("1", "Alpha").with_tags(["sketch"]).with_year("2023"),
//!     CatalogEntry::new("2", "Beta").with_tags(["paint"]).with_year("2021"),
//! ]);
//!
//! let mut engine = GalleryQueryEngine::new();
//! engine.set_tags(["Sketch"]);
//! let shown: Vec<_> = engine
//!     .current_results(&catalog)
//!     .into_iter()
//!     .map(|entry| entry.title.as_str())
//!     .collect();
//! assert_eq!(shown, vec!["Alpha"]);
//! ```

pub mod commission;
pub mod error;
pub mod query;
pub mod source;

pub use error::{CatalogError, LoadFailure, Result};
pub use source::{CatalogLoad, LoadStatus};
