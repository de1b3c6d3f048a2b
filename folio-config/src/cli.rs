//! Command definitions for the `folio` binary.
//!
//! Each catalog subcommand answers one page question against the configured
//! catalog; `commission` formats a commission request. Answers are rendered
//! as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::commission::CommissionRequest;
use folio_core::query::prelude::*;
use folio_core::source::load_catalog;
use folio_model::Catalog;
use serde_json::{Value, json};

use crate::loader::{ConfigLoader, ConfigLoaderOptions};
use crate::models::GalleryConfig;

/// Top-level `folio` arguments.
#[derive(Debug, Parser)]
#[command(name = "folio", about = "Query the Folio artwork catalog")]
pub struct Cli {
    /// TOML configuration file (defaults to $FOLIO_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Catalog document, overriding the configured path
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Queries the binary can answer.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filtered and sorted gallery results
    Gallery {
        /// Medium facet, or `all`
        #[arg(long, default_value = "all")]
        medium: String,
        /// Required tag; repeat for more
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// newest, oldest, title-asc, title-desc or authored
        #[arg(long)]
        sort: Option<GallerySort>,
    },
    /// Tag vocabulary offered by the filter picker
    Tags {
        /// Keep labels containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Related artworks for one entry
    Related {
        /// Focal artwork id
        id: String,
        /// Maximum number of results (defaults to `related_limit`)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Newest artworks for the home page
    Featured {
        /// Number of entries (defaults to `featured_limit`)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Detail page data: the entry and its related artworks
    Detail {
        /// Artwork id
        id: String,
    },
    /// Format a commission request (JSON form data) into its email message
    Commission {
        /// JSON file holding the submitted form fields
        request: PathBuf,
    },
}

impl Cli {
    fn loader(&self) -> ConfigLoader {
        ConfigLoader::with_options(ConfigLoaderOptions {
            config_path: self.config.clone(),
            catalog_path: self.catalog.clone(),
        })
    }
}

/// Resolve configuration from the process environment and run `cli`.
pub fn run(cli: &Cli) -> Result<Value> {
    let load = cli.loader().load()?;
    execute(&cli.command, &load.config)
}

/// Run one command against `config`.
pub fn execute(command: &Command, config: &GalleryConfig) -> Result<Value> {
    if let Command::Commission { request } = command {
        return commission(request);
    }
    let catalog = load_catalog(&config.catalog_path).with_context(|| {
        format!("failed to load catalog {}", config.catalog_path.display())
    })?;
    render(command, config, &catalog)
}

fn render(command: &Command, config: &GalleryConfig, catalog: &Catalog) -> Result<Value> {
    let value = match command {
        Command::Gallery { medium, tags, sort } => {
            let engine = GalleryQueryBuilder::new()
                .medium(medium)
                .tags(tags)
                .sort_by(sort.unwrap_or(config.default_sort))
                .into_engine();
            let results = engine.current_results(catalog);
            json!({
                "state": engine.state(),
                "total": catalog.len(),
                "results": results,
            })
        }
        Command::Tags { search } => {
            let options = TagExtractor::new().extract(catalog);
            let shown = search_tags(&options, search.as_deref().unwrap_or_default());
            serde_json::to_value(shown)?
        }
        Command::Related { id, limit } => {
            let limit = limit.unwrap_or(config.related_limit);
            let detail = lookup_detail(catalog, id, limit)?;
            serde_json::to_value(detail.related)?
        }
        Command::Featured { limit } => {
            let limit = limit.unwrap_or(config.featured_limit);
            serde_json::to_value(featured(catalog, limit))?
        }
        Command::Detail { id } => {
            let detail = lookup_detail(catalog, id, config.related_limit)?;
            serde_json::to_value(detail)?
        }
        Command::Commission { request } => commission(request)?,
    };
    Ok(value)
}

fn commission(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!("failed to read commission request {}", path.display())
    })?;
    let request: CommissionRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid commission request {}", path.display()))?;
    Ok(serde_json::to_value(request.format()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::CatalogEntry;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("a", "Alpha").with_tags(["ink"]).with_year("2020"),
            CatalogEntry::new("b", "Beta").with_tags(["Ink"]).with_year("2024"),
        ])
    }

    #[test]
    fn parses_repeated_tags_and_sort() {
        let cli = Cli::try_parse_from([
            "folio", "--catalog", "c.json", "gallery", "--tag", "ink", "--tag", "oil", "--sort",
            "title-asc",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
        match cli.command {
            Command::Gallery { medium, tags, sort } => {
                assert_eq!(medium, "all");
                assert_eq!(tags, vec!["ink", "oil"]);
                assert_eq!(sort, Some(GallerySort::TitleAsc));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn gallery_uses_configured_default_sort() {
        let config = GalleryConfig {
            default_sort: GallerySort::Oldest,
            ..GalleryConfig::default()
        };
        let command = Command::Gallery {
            medium: "all".into(),
            tags: Vec::new(),
            sort: None,
        };

        let value = render(&command, &config, &catalog()).unwrap();
        assert_eq!(value["state"]["sort"], "oldest");
        assert_eq!(value["results"][0]["title"], "Alpha");
        assert_eq!(value["total"], 2);
    }

    #[test]
    fn unknown_detail_id_is_an_error() {
        let command = Command::Detail { id: "zzz".into() };
        let err = render(&command, &GalleryConfig::default(), &catalog()).unwrap_err();
        assert!(err.to_string().contains("zzz"));
    }

    #[test]
    fn tag_search_returns_matching_labels() {
        let command = Command::Tags {
            search: Some("IN".into()),
        };
        let value = render(&command, &GalleryConfig::default(), &catalog()).unwrap();
        assert_eq!(value, json!([
            { "label": "ink", "value": "ink" },
            { "label": "Ink", "value": "ink" },
        ]));
    }
}
