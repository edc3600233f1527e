//! Extraction engine: composes the locators, the column mapper and the row
//! walkers into one pipeline per document shape.
//!
//! The engine is a pure function of the document. It never panics on page
//! content and never returns an error: anything missing degrades to absent
//! values or an empty set, and is reported to the configured [`EventSink`].

use fuelprice_core::{EntityRecord, ResultSet};

use crate::columns::build_column_map;
use crate::date::{locate_date, DateStrategy};
use crate::document::{Document, Shape};
use crate::events::{EventSink, ExtractionEvent, NoopSink};
use crate::rows::{extract_marker_rows, extract_table_rows};
use crate::table::{body_rows, candidate_rows, header_cells, locate_table};

/// Heading that introduces the city table on the city price page.
pub const DEFAULT_SECTION_CUE: &str = "Detaliczne ceny paliw w poszczególnych miastach wojewódzkich";
/// Phrase preceding the date in the city page heading ("... w dniu 2025-03-04").
pub const DEFAULT_DATE_CUE: &str = "w dniu";
/// Class marker of the city table, used when the section heading is gone.
pub const DEFAULT_TABLE_CLASS: &str = "ceny-paliw";

/// Page-specific cue strings for the multi-entity pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProfile {
    pub section_cue: String,
    pub date_cue: String,
    pub fallback_table_class: String,
}

impl Default for PageProfile {
    fn default() -> Self {
        Self {
            section_cue: DEFAULT_SECTION_CUE.to_owned(),
            date_cue: DEFAULT_DATE_CUE.to_owned(),
            fallback_table_class: DEFAULT_TABLE_CLASS.to_owned(),
        }
    }
}

/// Output of [`ExtractionEngine::extract`], tagged by document shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Single(EntityRecord),
    Multi {
        records: ResultSet,
        date: Option<String>,
    },
}

pub struct ExtractionEngine<'s> {
    profile: PageProfile,
    sink: &'s dyn EventSink,
}

impl Default for ExtractionEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionEngine<'static> {
    /// Engine with the default profile that discards events.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile: PageProfile::default(),
            sink: &NoopSink,
        }
    }
}

impl<'s> ExtractionEngine<'s> {
    /// Engine with the default profile reporting to `sink`.
    #[must_use]
    pub fn with_sink(sink: &'s dyn EventSink) -> Self {
        Self {
            profile: PageProfile::default(),
            sink,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: PageProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Runs the pipeline matching the document's shape tag. `name` labels
    /// the record of a single-entity page and is ignored otherwise.
    #[must_use]
    pub fn extract(&self, document: &Document, name: &str) -> Extraction {
        match document.shape() {
            Shape::SingleEntity => Extraction::Single(self.extract_single_entity(document, name)),
            Shape::MultiEntity => {
                let (records, date) = self.extract_multi_entity(document);
                Extraction::Multi { records, date }
            }
        }
    }

    /// Extracts the record of a per-region page.
    ///
    /// The date comes from table header cells only; the prices from the
    /// marker rows. A page without marker rows, or a document of the wrong
    /// shape, yields a record with all four codes absent and no date.
    #[must_use]
    pub fn extract_single_entity(&self, document: &Document, name: &str) -> EntityRecord {
        if document.shape() != Shape::SingleEntity {
            self.sink.record(&ExtractionEvent::ShapeMismatch {
                expected: Shape::SingleEntity,
                actual: document.shape(),
            });
            return EntityRecord::empty(name);
        }

        let prices = extract_marker_rows(&candidate_rows(document), name, self.sink);
        if prices.is_empty() {
            self.sink.record(&ExtractionEvent::NoMarkerRows);
            return EntityRecord::empty(name);
        }
        self.sink
            .record(&ExtractionEvent::MarkerRowsFound { count: prices.len() });

        let mut record = EntityRecord::empty(name);
        record.prices.extend(prices);
        record.date = self.locate_date(document, &[DateStrategy::HeaderCells]);
        self.sink
            .record(&ExtractionEvent::EntitiesExtracted { count: 1 });
        record
    }

    /// Extracts every city row of a multi-entity page together with the
    /// page date.
    ///
    /// A missing table or an unusable header row yields an empty set; the
    /// date is still returned when found. The set's `shared_date` mirrors
    /// the returned date.
    #[must_use]
    pub fn extract_multi_entity(&self, document: &Document) -> (ResultSet, Option<String>) {
        if document.shape() != Shape::MultiEntity {
            self.sink.record(&ExtractionEvent::ShapeMismatch {
                expected: Shape::MultiEntity,
                actual: document.shape(),
            });
            return (ResultSet::new(), None);
        }

        let date = self.locate_date(
            document,
            &[
                DateStrategy::Headings {
                    cue: Some(self.profile.date_cue.as_str()),
                },
                DateStrategy::HeaderCells,
            ],
        );

        let mut records = self.city_records(document);
        records.shared_date.clone_from(&date);
        (records, date)
    }

    fn city_records(&self, document: &Document) -> ResultSet {
        let Some(table) = locate_table(
            document,
            &self.profile.section_cue,
            &self.profile.fallback_table_class,
        ) else {
            self.sink.record(&ExtractionEvent::TableMissing {
                section_cue: &self.profile.section_cue,
                fallback_class: &self.profile.fallback_table_class,
            });
            return ResultSet::new();
        };
        self.sink
            .record(&ExtractionEvent::TableFound { source: table.source });

        let headers = header_cells(table.element);
        let map = match build_column_map(&headers) {
            Ok(map) => map,
            Err(error) => {
                self.sink
                    .record(&ExtractionEvent::ColumnsUnmapped { error: &error });
                return ResultSet::new();
            }
        };

        let records = extract_table_rows(&body_rows(table.element), &map, self.sink);
        self.sink.record(&ExtractionEvent::EntitiesExtracted {
            count: records.len(),
        });
        records
    }

    fn locate_date(&self, document: &Document, strategies: &[DateStrategy<'_>]) -> Option<String> {
        match locate_date(document, strategies) {
            Some(found) => {
                self.sink.record(&ExtractionEvent::DateFound {
                    date: &found.date,
                    strategy: found.strategy,
                });
                Some(found.date)
            }
            None => {
                self.sink.record(&ExtractionEvent::DateMissing);
                None
            }
        }
    }
}

/// Extracts a per-region page with the default engine.
#[must_use]
pub fn extract_single_entity(document: &Document, name: &str) -> EntityRecord {
    ExtractionEngine::new().extract_single_entity(document, name)
}

/// Extracts the city page with the default engine.
#[must_use]
pub fn extract_multi_entity(document: &Document) -> (ResultSet, Option<String>) {
    ExtractionEngine::new().extract_multi_entity(document)
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
