//! Observer hooks for the extraction engine.
//!
//! The engine degrades silently to absent values; anything worth reporting
//! is handed to an injected [`EventSink`] instead of being logged directly.

use fuelprice_core::FuelCode;

use crate::columns::MappingError;
use crate::document::Shape;
use crate::table::TableSource;

/// Something the engine noticed while reading a page.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionEvent<'a> {
    DateFound {
        date: &'a str,
        strategy: &'static str,
    },
    DateMissing,
    TableFound {
        source: TableSource,
    },
    TableMissing {
        section_cue: &'a str,
        fallback_class: &'a str,
    },
    ColumnsUnmapped {
        error: &'a MappingError,
    },
    RowSkipped {
        row: usize,
        cells: usize,
        required: usize,
    },
    RowUnnamed {
        row: usize,
    },
    DuplicateEntity {
        name: &'a str,
    },
    PriceUnparsed {
        entity: &'a str,
        code: FuelCode,
        raw: &'a str,
    },
    MarkerRowsFound {
        count: usize,
    },
    NoMarkerRows,
    ShapeMismatch {
        expected: Shape,
        actual: Shape,
    },
    EntitiesExtracted {
        count: usize,
    },
}

/// Receives engine events. Implementations must not panic.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &ExtractionEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &ExtractionEvent<'_>) {}
}

/// Forwards events to `tracing`: structural misses at `warn`, the rest at
/// `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &ExtractionEvent<'_>) {
        match event {
            ExtractionEvent::DateFound { date, strategy } => {
                tracing::debug!(date, strategy, "update date found");
            }
            ExtractionEvent::DateMissing => tracing::warn!("no update date on page"),
            ExtractionEvent::TableFound { source } => {
                tracing::debug!(?source, "price table located");
            }
            ExtractionEvent::TableMissing {
                section_cue,
                fallback_class,
            } => {
                tracing::warn!(section_cue, fallback_class, "price table not found");
            }
            ExtractionEvent::ColumnsUnmapped { error } => {
                tracing::warn!(error = %error, "unexpected table header layout");
            }
            ExtractionEvent::RowSkipped {
                row,
                cells,
                required,
            } => {
                tracing::debug!(row, cells, required, "skipping short table row");
            }
            ExtractionEvent::RowUnnamed { row } => {
                tracing::debug!(row, "skipping table row without entity name");
            }
            ExtractionEvent::DuplicateEntity { name } => {
                tracing::warn!(name, "entity listed twice; keeping the later row");
            }
            ExtractionEvent::PriceUnparsed { entity, code, raw } => {
                tracing::debug!(entity, code = %code, raw, "price cell did not parse");
            }
            ExtractionEvent::MarkerRowsFound { count } => {
                tracing::debug!(count, "marker rows found");
            }
            ExtractionEvent::NoMarkerRows => tracing::warn!("no marker rows on page"),
            ExtractionEvent::ShapeMismatch { expected, actual } => {
                tracing::warn!(%expected, %actual, "document shape does not match pipeline");
            }
            ExtractionEvent::EntitiesExtracted { count } => {
                tracing::info!(count, "entities extracted");
            }
        }
    }
}
