//! Shared setup for the `localrec` binaries: argument groups, logging,
//! catalog and tag table selection, and result rendering.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use localrec_core::catalog::JsonCatalog;
use localrec_core::config::{Config, Settings};
use localrec_core::sample::example_catalog;
use localrec_core::{CatalogItem, CatalogRecord, QueryResult};
use localrec_engine::{Recommender, Snapshot};
use localrec_text::{Analyzer, TagExtractor, TagTable};

/// Where the catalog and the tag table come from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// JSON catalog file. Defaults to `catalog.path`, then the built-in sample.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Tag table (`.toml` or `.json`). Defaults to `tags.path`, then the built-in table.
    #[arg(long, value_name = "FILE")]
    pub tags: Option<PathBuf>,
}

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// A recommender with the selected catalog already fitted and published.
pub struct App {
    pub settings: Settings,
    pub recommender: Recommender,
}

impl App {
    pub fn from_config(config: &Config, settings: Settings, sources: &SourceArgs) -> Result<Self> {
        let catalog = sources
            .catalog
            .clone()
            .or_else(|| settings.catalog.path.as_deref().map(|p| config.resolve(p)));
        let tags = sources
            .tags
            .clone()
            .or_else(|| settings.tags.path.as_deref().map(|p| config.resolve(p)));

        let tagger = match tags {
            Some(path) => {
                let table = TagTable::from_path(&path)
                    .with_context(|| format!("loading tag table {}", path.display()))?;
                TagExtractor::new(&table)?
            }
            None => TagExtractor::builtin(),
        };
        let recommender = Recommender::with_analyzer(tagger, Analyzer::from_settings(&settings.analyzer));

        match catalog {
            Some(path) => {
                let source = JsonCatalog::new(&path);
                recommender
                    .rebuild(&source)
                    .with_context(|| format!("loading catalog {}", path.display()))?;
            }
            None => {
                info!("no catalog configured, using the example catalog");
                recommender.rebuild(&example_catalog())?;
            }
        }
        Ok(Self { settings, recommender })
    }

    pub fn snapshot(&self) -> Result<std::sync::Arc<Snapshot>> {
        Ok(self.recommender.current()?)
    }

    /// Records of the published snapshot, in catalog order.
    pub fn records(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.snapshot()?.items().iter().map(|i| i.record().clone()).collect())
    }
}

#[derive(Debug, Serialize)]
pub struct Recommendation<'a> {
    pub rank: usize,
    pub id: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub score: f64,
    pub shared_tags: &'a [String],
}

pub fn recommendations<'a>(snapshot: &'a Snapshot, results: &'a [QueryResult]) -> Vec<Recommendation<'a>> {
    results
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            snapshot.item(r.position).map(|item| Recommendation {
                rank: i + 1,
                id: item.id(),
                name: item.name(),
                city: item.city(),
                score: r.score,
                shared_tags: &r.shared_tags,
            })
        })
        .collect()
}

pub fn render_recommendations(query: &str, recs: &[Recommendation<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recomendaciones para la consulta: '{query}'");
    for rec in recs {
        let _ = writeln!(out, "{}. {} – {} (similitud={:.3})", rec.rank, rec.name, rec.city, rec.score);
        if rec.shared_tags.is_empty() {
            let _ = writeln!(out, "   Razón: coincide por contenido general de la descripción");
        } else {
            let _ = writeln!(out, "   Razón: coincide en tags: {}", rec.shared_tags.join(", "));
        }
    }
    out
}

/// The inspection view of one item.
#[derive(Debug, Serialize)]
pub struct ItemView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub tags: &'a [String],
    pub description: &'a str,
}

impl<'a> From<&'a CatalogItem> for ItemView<'a> {
    fn from(item: &'a CatalogItem) -> Self {
        Self {
            id: item.id(),
            name: item.name(),
            category: item.category(),
            tags: item.tags(),
            description: item.description(),
        }
    }
}
