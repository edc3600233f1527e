//! Concurrent per-region fetch and extraction.

use futures::stream::{self, StreamExt};
use fuelprice_core::{EntityRecord, RegionConfig, ResultSet};
use fuelprice_scraper::{Document, ExtractionEngine, PageClient, Shape, TracingSink};
use tracing::Instrument;

use crate::debug_dump::DebugDump;

/// Record for one region plus whether its page was fetched at all.
#[derive(Debug)]
pub(super) struct RegionOutcome {
    pub record: EntityRecord,
    pub fetched: bool,
}

/// Fetches and extracts every region with at most `max_concurrent` requests
/// in flight. Results come back in completion order.
pub(super) async fn collect_regions(
    client: &PageClient,
    regions: &[&RegionConfig],
    max_concurrent: usize,
    dump: &DebugDump,
) -> Vec<RegionOutcome> {
    stream::iter(regions)
        .map(|region| collect_region(client, region, dump))
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await
}

async fn collect_region(
    client: &PageClient,
    region: &RegionConfig,
    dump: &DebugDump,
) -> RegionOutcome {
    let span = tracing::info_span!("region", slug = %region.slug);
    async {
        match client.fetch_page(&region.url).await {
            Ok(html) => {
                dump.write(&region.slug, &html);
                RegionOutcome {
                    record: extract_region(&html, &region.slug),
                    fetched: true,
                }
            }
            Err(e) => {
                tracing::error!(url = %region.url, error = %e, "failed to fetch region page");
                RegionOutcome {
                    record: EntityRecord::empty(&region.slug),
                    fetched: false,
                }
            }
        }
    }
    .instrument(span)
    .await
}

/// Parses and extracts one region page. Kept synchronous: the parsed tree is
/// not `Send` and must not live across an `.await`.
pub(super) fn extract_region(html: &str, slug: &str) -> EntityRecord {
    let document = Document::parse(html, Shape::SingleEntity);
    ExtractionEngine::with_sink(&TracingSink).extract_single_entity(&document, slug)
}

/// Folds region outcomes into the report set.
///
/// The shared date is the latest per-region date. Fails only when no region
/// page could be fetched.
pub(super) fn region_result_set(outcomes: Vec<RegionOutcome>) -> anyhow::Result<ResultSet> {
    let total = outcomes.len();
    let failed = outcomes.iter().filter(|o| !o.fetched).count();

    if failed > 0 {
        tracing::warn!(failed, total, "some regions failed to fetch");
    }
    if total > 0 && failed == total {
        anyhow::bail!("all {failed} regions failed to fetch");
    }

    let mut set: ResultSet = outcomes.into_iter().map(|o| o.record).collect();
    set.shared_date = set.latest_record_date();
    Ok(set)
}
