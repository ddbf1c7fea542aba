use anyhow::{bail, Result};
use clap::Parser;

use localrec_cli::{init_tracing, App, SourceArgs};
use localrec_core::config::Config;

/// Show the tags and the indexed document of catalog items.
#[derive(Debug, Parser)]
#[command(name = "localrec-inspect", version)]
struct Cli {
    /// Item ids to show. All items when empty.
    ids: Vec<String>,

    #[command(flatten)]
    sources: SourceArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let settings = config.settings()?;
    init_tracing(&settings.log.filter);

    let app = App::from_config(&config, settings, &cli.sources)?;
    let records = app.records()?;

    let unknown: Vec<&str> = cli
        .ids
        .iter()
        .filter(|id| !records.iter().any(|r| &r.id == *id))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        bail!("unknown item id(s): {}", unknown.join(", "));
    }

    for record in records.iter().filter(|r| cli.ids.is_empty() || cli.ids.contains(&r.id)) {
        println!("{} ({})", record.id, record.name);
        println!("  tags: {}", app.recommender.tags_for(record).join(", "));
        println!("  document: {}", app.recommender.document_for(record));
    }
    Ok(())
}
