//! Collection command handlers for the CLI.
//!
//! These are called from `main` after config and logging are established.
//! Per-region fetch failures are logged and recorded as empty records rather
//! than propagated so a single bad page does not abort the full run.

mod runner;

use fuelprice_core::{load_regions, AppConfig, PriceReport, RegionConfig, RegionsFile, ResultSet};
use fuelprice_scraper::{Document, ExtractionEngine, PageClient, Shape, TracingSink};
use tracing::Instrument;

use crate::debug_dump::{DebugDump, CITY_PAGE_STEM};
use crate::output;

pub(crate) fn build_page_client(config: &AppConfig) -> anyhow::Result<PageClient> {
    PageClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
        config.scraper_max_retries,
        config.scraper_retry_delay_ms,
    )
    .map_err(|e| anyhow::anyhow!("failed to build page client: {e}"))
}

/// Resolve the regions to process for a collect run.
///
/// With `region_filter`, returns that single region or an error if no region
/// has that slug. Without it, returns every configured region.
pub(crate) fn select_regions<'a>(
    regions_file: &'a RegionsFile,
    region_filter: Option<&str>,
) -> anyhow::Result<Vec<&'a RegionConfig>> {
    match region_filter {
        Some(slug) => {
            let region = regions_file
                .find(slug)
                .ok_or_else(|| anyhow::anyhow!("region '{slug}' not found in regions file"))?;
            Ok(vec![region])
        }
        None => Ok(regions_file.regions.iter().collect()),
    }
}

/// Fetch the per-region pages and write `regions.json` plus a history copy.
///
/// When `dry_run` is `true` the function prints the regions that would be
/// fetched and returns without touching the network. With `region_filter`
/// the one-region report is printed to stdout and no file is written, so a
/// partial run never replaces the full report.
///
/// # Errors
///
/// Returns an error if the regions file cannot be loaded, the filter matches
/// nothing, the client cannot be built, every region failed to fetch, or the
/// report cannot be written. Nothing is written when every region failed.
pub(crate) async fn run_regions(
    config: &AppConfig,
    region_filter: Option<&str>,
    dry_run: bool,
    dump: &DebugDump,
) -> anyhow::Result<()> {
    let regions_file = load_regions(&config.regions_path)?;
    let regions = select_regions(&regions_file, region_filter)?;

    if dry_run {
        let slugs: Vec<&str> = regions.iter().map(|r| r.slug.as_str()).collect();
        println!(
            "dry-run: would fetch {} regions: [{}]",
            regions.len(),
            slugs.join(", ")
        );
        return Ok(());
    }

    if let Some(dir) = dump.dir() {
        tracing::info!(dir = %dir.display(), "dumping fetched pages");
    }

    let client = build_page_client(config)?;
    let results = runner::collect_regions(
        &client,
        &regions,
        config.scraper_max_concurrent_regions,
        dump,
    )
    .await;
    let set = runner::region_result_set(results)?;

    let generated_at = chrono::Local::now();
    let report = PriceReport::from_result_set(set, &generated_at);

    if region_filter.is_some() {
        tracing::info!(
            regions = report.entities.len(),
            date = ?report.date,
            "filtered run; report printed, files left untouched"
        );
        print!("{}", output::render(&report)?);
        return Ok(());
    }

    let (latest, history) =
        output::write_regions_report(&config.output_dir, &report, &generated_at)?;

    tracing::info!(
        regions = report.entities.len(),
        date = ?report.date,
        path = %latest.display(),
        history = %history.display(),
        "region report written"
    );
    println!("wrote {} regions to {}", report.entities.len(), latest.display());
    Ok(())
}

/// Fetch the city page and overwrite `cities.json`.
///
/// A failed fetch is logged and produces an empty report, matching how a
/// failed region page yields an empty record.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the report cannot be
/// written.
pub(crate) async fn run_cities(config: &AppConfig, dump: &DebugDump) -> anyhow::Result<()> {
    let client = build_page_client(config)?;

    let span = tracing::info_span!("cities", url = %config.cities_url);
    let set = async {
        match client.fetch_page(&config.cities_url).await {
            Ok(html) => {
                dump.write(CITY_PAGE_STEM, &html);
                extract_cities(&html)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch city page");
                ResultSet::new()
            }
        }
    }
    .instrument(span)
    .await;

    let report = PriceReport::from_result_set(set, &chrono::Local::now());
    let path = output::write_cities_report(&config.output_dir, &report)?;

    tracing::info!(
        cities = report.entities.len(),
        date = ?report.date,
        path = %path.display(),
        "city report written"
    );
    println!("wrote {} cities to {}", report.entities.len(), path.display());
    Ok(())
}

/// Parses and extracts the city page. Kept synchronous: the parsed tree is
/// not `Send` and must not live across an `.await`.
pub(crate) fn extract_cities(html: &str) -> ResultSet {
    let document = Document::parse(html, Shape::MultiEntity);
    let (records, _date) = ExtractionEngine::with_sink(&TracingSink).extract_multi_entity(&document);
    records
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
