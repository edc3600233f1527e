//! Row walkers turning located rows into normalized records.

use std::collections::BTreeMap;

use fuelprice_core::{EntityRecord, FuelCode, ResultSet};
use scraper::ElementRef;

use crate::columns::ColumnMap;
use crate::dom::{child_elements, data_cells, descendant_elements, element_text};
use crate::events::{EventSink, ExtractionEvent};
use crate::price::parse_price;

/// Fuel identity of the n-th marker row on a single-entity page.
///
/// The regional pages carry no usable fuel label per row, so identity comes
/// from position alone. If a page ever reorders its rows the prices end up
/// under the wrong codes; nothing here cross-checks them.
pub const MARKER_ROW_ORDER: [FuelCode; 4] = FuelCode::ALL;

/// Characters stripped from both ends of an entity name.
const NAME_QUOTES: &[char] = &['"', '\'', '„', '”', '“', '«', '»', '`'];

/// Builds one record per body row of a city table.
///
/// Rows with fewer cells than the header row has columns are skipped, even
/// when the missing cells are unmapped, as are rows whose name cell is
/// blank. A repeated name replaces the earlier record.
pub fn extract_table_rows(
    rows: &[ElementRef<'_>],
    map: &ColumnMap,
    sink: &dyn EventSink,
) -> ResultSet {
    let required = map.width();
    let mut set = ResultSet::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let cells = data_cells(*row);
        if cells.len() < required {
            sink.record(&ExtractionEvent::RowSkipped {
                row: row_idx,
                cells: cells.len(),
                required,
            });
            continue;
        }

        let name = clean_entity_name(&element_text(cells[map.name_index()]));
        if name.is_empty() {
            sink.record(&ExtractionEvent::RowUnnamed { row: row_idx });
            continue;
        }

        let mut record = EntityRecord::new(name);
        for (code, idx) in map.fuels() {
            let raw = element_text(cells[idx]);
            let value = parse_price(&raw);
            if value.is_none() {
                sink.record(&ExtractionEvent::PriceUnparsed {
                    entity: &record.name,
                    code,
                    raw: &raw,
                });
            }
            record.prices.insert(code, value);
        }

        if let Some(previous) = set.insert(record) {
            sink.record(&ExtractionEvent::DuplicateEntity {
                name: &previous.name,
            });
        }
    }

    set
}

/// Reads prices from the marker rows of a single-entity page.
///
/// A row counts only if it contains an image or inline SVG. The n-th
/// counting row is assigned [`MARKER_ROW_ORDER`]`[n]` and its price is read
/// from the second cell (`td` or `th`), the first holding the marker. Scanning stops after
/// four counting rows. The returned map holds only the positions reached.
pub fn extract_marker_rows(
    rows: &[ElementRef<'_>],
    entity: &str,
    sink: &dyn EventSink,
) -> BTreeMap<FuelCode, Option<f64>> {
    let mut prices = BTreeMap::new();

    for (code, row) in MARKER_ROW_ORDER
        .iter()
        .zip(rows.iter().filter(|row| has_marker(**row)))
    {
        let raw = child_elements(*row, &["td", "th"])
            .nth(1)
            .map(element_text)
            .unwrap_or_default();
        let value = parse_price(&raw);
        if value.is_none() {
            sink.record(&ExtractionEvent::PriceUnparsed {
                entity,
                code: *code,
                raw: &raw,
            });
        }
        prices.insert(*code, value);
    }

    prices
}

fn has_marker(row: ElementRef<'_>) -> bool {
    descendant_elements(row).any(|el| matches!(el.value().name(), "img" | "svg"))
}

/// Trims whitespace and stray quote characters from a name cell.
#[must_use]
pub fn clean_entity_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| NAME_QUOTES.contains(&c) || c.is_whitespace())
        .to_owned()
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod tests;
