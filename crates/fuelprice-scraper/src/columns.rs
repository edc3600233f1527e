//! Header-driven column mapping for multi-entity tables.

use std::collections::BTreeMap;

use fuelprice_core::FuelCode;
use thiserror::Error;

/// Header labels that mark the entity-name column. A header equal to or
/// containing one of these (case-insensitive) qualifies.
pub const NAME_COLUMN_LABELS: [&str; 4] = ["MIASTO", "WOJEWÓDZTWO", "CITY", "REGION"];

/// Column positions of the entity name and of every recognized fuel, plus
/// the width of the header row they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    name_index: usize,
    fuels: BTreeMap<FuelCode, usize>,
    width: usize,
}

impl ColumnMap {
    #[must_use]
    pub fn name_index(&self) -> usize {
        self.name_index
    }

    /// Mapped fuels in canonical order.
    pub fn fuels(&self) -> impl Iterator<Item = (FuelCode, usize)> + '_ {
        self.fuels.iter().map(|(code, idx)| (*code, *idx))
    }

    /// Number of header cells, mapped or not. Body rows with fewer cells
    /// than this are skipped.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Why a header row could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("no entity-name column among headers {headers:?}")]
    MissingNameColumn { headers: Vec<String> },

    #[error("no recognized fuel column among headers {headers:?}")]
    NoFuelColumns { headers: Vec<String> },
}

/// Maps header cells to column positions by label alone.
///
/// Column order is never assumed. Fuel labels go through
/// [`FuelCode::from_page_label`]; when a fuel appears twice the first column
/// wins. Headers matching nothing are ignored.
///
/// # Errors
///
/// [`MappingError::MissingNameColumn`] when no header names the entity
/// column, [`MappingError::NoFuelColumns`] when no fuel label is recognized.
pub fn build_column_map<S: AsRef<str>>(headers: &[S]) -> Result<ColumnMap, MappingError> {
    let mut name_index = None;
    let mut fuels = BTreeMap::new();

    for (idx, header) in headers.iter().enumerate() {
        let header = header.as_ref().trim();
        if let Some(code) = FuelCode::from_page_label(header) {
            fuels.entry(code).or_insert(idx);
        } else if name_index.is_none() && is_name_label(header) {
            name_index = Some(idx);
        }
    }

    let owned = || headers.iter().map(|h| h.as_ref().to_owned()).collect();

    let Some(name_index) = name_index else {
        return Err(MappingError::MissingNameColumn { headers: owned() });
    };
    if fuels.is_empty() {
        return Err(MappingError::NoFuelColumns { headers: owned() });
    }

    Ok(ColumnMap {
        name_index,
        fuels,
        width: headers.len(),
    })
}

fn is_name_label(header: &str) -> bool {
    let upper = header.to_uppercase();
    NAME_COLUMN_LABELS.iter().any(|label| upper.contains(label))
}

#[cfg(test)]
#[path = "columns_test.rs"]
mod tests;
