use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use partscout::{Catalog, SearchConfig};

mod cli;
use cli::{report, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results and `--json`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "partscout=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            catalog,
            query,
            tuning,
            json,
        } => {
            let config = tuning.resolve().context("invalid search settings")?;
            let catalog = open(&catalog)?;
            run_search(&catalog, &query, &config, json)
        }
        Commands::Inspect { catalog: path } => {
            let catalog = open(&path)?;
            report::print_inspect(&path, &catalog.snapshot());
            Ok(())
        }
        Commands::Repl {
            catalog: path,
            tuning,
        } => {
            let config = tuning.resolve().context("invalid search settings")?;
            let catalog = open(&path)?;
            run_repl(&catalog, &path, &config)
        }
    }
}

fn open(path: &Path) -> Result<Catalog> {
    let spinner = report::loading_spinner(path);
    let catalog = Catalog::open(path);
    spinner.finish_and_clear();
    catalog.with_context(|| format!("catalog unavailable: {}", path.display()))
}

fn run_search(catalog: &Catalog, query: &str, config: &SearchConfig, json: bool) -> Result<()> {
    let (index, outcome) = catalog.search_snapshot(query, config);
    if json {
        let stdout = io::stdout();
        serde_json::to_writer_pretty(stdout.lock(), &outcome.resolve(&index))
            .context("failed to write JSON output")?;
        println!();
        return Ok(());
    }

    report::print_banner(index.len());
    report::print_outcome(&index, &outcome, config);
    Ok(())
}

fn run_repl(catalog: &Catalog, path: &Path, config: &SearchConfig) -> Result<()> {
    report::print_banner(catalog.snapshot().len());
    eprintln!("Type a query, :reload to re-read the catalog, :quit to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("search> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;

        match line.trim() {
            ":quit" | ":q" => return Ok(()),
            ":reload" => match catalog.reload(path) {
                Ok(generation) => println!(
                    "Reloaded {} parts (generation {})",
                    catalog.snapshot().len(),
                    generation
                ),
                // The old catalog keeps serving
                Err(e) => eprintln!("❌ reload failed: {}", e),
            },
            query => {
                let (index, outcome) = catalog.search_snapshot(query, config);
                report::print_outcome(&index, &outcome, config);
            }
        }
        println!();
    }
}
