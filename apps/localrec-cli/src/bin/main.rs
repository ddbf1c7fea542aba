use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use localrec_cli::{init_tracing, recommendations, render_recommendations, App, ItemView, SourceArgs};
use localrec_core::config::Config;

/// Demo de sistema de recomendaciones.
#[derive(Debug, Parser)]
#[command(name = "localrec", version)]
struct Cli {
    /// List the catalog and ask for a query on stdin.
    #[arg(long)]
    demo: bool,

    /// Run one query and print the recommendations.
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Number of recommendations. Defaults to `recommend.default_top_k`.
    #[arg(long, short = 'k', value_name = "N")]
    top_k: Option<usize>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    sources: SourceArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let settings = config.settings()?;
    init_tracing(&settings.log.filter);

    let app = App::from_config(&config, settings, &cli.sources)?;
    let snapshot = app.snapshot()?;

    if !cli.demo && cli.query.is_none() {
        if !cli.json {
            println!("Businesses con tags extraídos:\n");
        }
        for item in snapshot.items() {
            println!("{}", serde_json::to_string_pretty(&ItemView::from(item))?);
        }
        return Ok(());
    }

    let query = match cli.query {
        Some(q) => q,
        None => prompt(&snapshot)?,
    };
    let top_k = cli.top_k.unwrap_or(app.settings.recommend.default_top_k);
    let results = snapshot.query(&query, top_k)?;
    let recs = recommendations(&snapshot, &results);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
    } else {
        println!();
        print!("{}", render_recommendations(&query, &recs));
        println!();
    }
    Ok(())
}

fn prompt(snapshot: &localrec_engine::Snapshot) -> Result<String> {
    println!("Lista de negocios disponibles:");
    for item in snapshot.items() {
        println!("- {} ({}) – {}", item.name(), item.category(), item.city());
    }
    println!();
    print!("Ingresa tu consulta (por ejemplo: 'quiero sushi barato para una cita'): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
