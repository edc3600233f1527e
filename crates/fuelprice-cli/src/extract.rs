//! Offline extraction of a saved page, for replaying debug dumps.

use std::path::Path;

use fuelprice_core::{PriceReport, ResultSet};
use fuelprice_scraper::{Document, Extraction, ExtractionEngine, Shape, TracingSink};

use crate::output;

/// Runs the engine on the page at `file` and prints the report JSON to stdout.
pub(crate) fn run_extract(shape: Shape, file: &Path, name: &str) -> anyhow::Result<()> {
    let markup = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))?;

    let set = extract_markup(&markup, shape, name);
    let report = PriceReport::from_result_set(set, &chrono::Local::now());
    print!("{}", output::render(&report)?);
    Ok(())
}

/// Extracts `markup` into a result set. A single-entity record becomes a
/// one-entry set whose shared date is the record's own date.
pub(crate) fn extract_markup(markup: &str, shape: Shape, name: &str) -> ResultSet {
    let document = Document::parse(markup, shape);
    match ExtractionEngine::with_sink(&TracingSink).extract(&document, name) {
        Extraction::Single(record) => {
            let shared_date = record.date.clone();
            let mut set: ResultSet = std::iter::once(record).collect();
            set.shared_date = shared_date;
            set
        }
        Extraction::Multi { records, .. } => records,
    }
}
