mod collect;
mod debug_dump;
mod extract;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fuelprice_core::Environment;

use crate::debug_dump::DebugDump;

#[derive(Debug, Parser)]
#[command(name = "fuelprice-cli")]
#[command(about = "Collects retail fuel prices for Polish regions and cities")]
struct Cli {
    /// Write every fetched page into this directory (overrides FUELPRICE_DEBUG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    debug_dump: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every configured region page and write regions.json
    Regions {
        /// Fetch a single region (by slug) and print its report instead of
        /// writing regions.json
        #[arg(long)]
        region: Option<String>,

        /// List the regions that would be fetched without fetching them
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch the city price page and write cities.json
    Cities,
    /// Run `regions` and `cities` in one go
    All,
    /// Run the extraction engine on a saved page and print the result as JSON
    Extract {
        #[arg(long, value_enum)]
        shape: ShapeArg,

        #[arg(long)]
        file: PathBuf,

        /// Record name for single-entity pages
        #[arg(long, default_value = "document")]
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Single,
    Multi,
}

impl From<ShapeArg> for fuelprice_scraper::Shape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Single => fuelprice_scraper::Shape::SingleEntity,
            ShapeArg::Multi => fuelprice_scraper::Shape::MultiEntity,
        }
    }
}

/// Production runs log plain text for log collectors.
fn use_ansi(env: &Environment) -> bool {
    !matches!(env, Environment::Production)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = fuelprice_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout is reserved for command output (`extract` prints JSON there).
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(&config.env))
        .init();
    tracing::debug!(env = %config.env, output_dir = %config.output_dir.display(), "config loaded");

    let dump = DebugDump::new(cli.debug_dump.or_else(|| config.debug_dir.clone()));

    match cli.command {
        Commands::Regions { region, dry_run } => {
            collect::run_regions(&config, region.as_deref(), dry_run, &dump).await
        }
        Commands::Cities => collect::run_cities(&config, &dump).await,
        Commands::All => {
            let regions = collect::run_regions(&config, None, false, &dump).await;
            if let Err(e) = &regions {
                tracing::error!(error = %e, "region collection failed; continuing with cities");
            }
            let cities = collect::run_cities(&config, &dump).await;
            regions.and(cities)
        }
        Commands::Extract { shape, file, name } => extract::run_extract(shape.into(), &file, &name),
    }
}

#[cfg(test)]
mod tests;
