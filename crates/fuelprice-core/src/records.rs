//! Normalized price records produced by the extraction engine and the report
//! shape they are serialized into.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::fuel::FuelCode;

/// Timestamp layout used for `update_timestamp` in written reports.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prices for one region or city.
///
/// `prices` carries an entry for every code the source page exposed, with
/// `None` where the cell could not be parsed. Codes the page never mentioned
/// are left out rather than filled with zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Map key in serialized output, so not repeated in the value.
    #[serde(skip)]
    pub name: String,
    /// ISO `YYYY-MM-DD` update date, when the page carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub prices: BTreeMap<FuelCode, Option<f64>>,
}

impl EntityRecord {
    /// Creates a record with no date and no price columns.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
            prices: BTreeMap::new(),
        }
    }

    /// Creates a record with every fuel code present but absent-valued.
    ///
    /// This is what a region gets when its page could not be fetched or
    /// yielded nothing usable.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        let mut record = Self::new(name);
        for code in FuelCode::ALL {
            record.prices.insert(code, None);
        }
        record
    }

    /// Parsed price for `code`, flattening "no column" and "unparseable" into `None`.
    #[must_use]
    pub fn price(&self, code: FuelCode) -> Option<f64> {
        self.prices.get(&code).copied().flatten()
    }

    /// Returns `true` when no price in the record parsed to a value.
    #[must_use]
    pub fn has_no_prices(&self) -> bool {
        self.prices.values().all(Option::is_none)
    }
}

/// Records keyed by entity name, plus the date shared by all of them when the
/// source reported one at document level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: BTreeMap<String, EntityRecord>,
    pub shared_date: Option<String>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. A record with the same name is
    /// replaced and returned.
    pub fn insert(&mut self, record: EntityRecord) -> Option<EntityRecord> {
        self.records.insert(record.name.clone(), record)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntityRecord> {
        self.records.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.values()
    }

    /// Most recent per-record date, used as the shared date for sets built
    /// from independently dated single-entity pages.
    ///
    /// ISO dates order lexicographically, so the string maximum is the
    /// latest day.
    #[must_use]
    pub fn latest_record_date(&self) -> Option<String> {
        self.records
            .values()
            .filter_map(|r| r.date.as_deref())
            .max()
            .map(str::to_owned)
    }
}

impl FromIterator<EntityRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = EntityRecord>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

/// Serialized output of one collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    /// Local wall-clock time the report was assembled.
    pub update_timestamp: String,
    /// Date shared across entities (national date for regions, table date for cities).
    pub date: Option<String>,
    pub entities: BTreeMap<String, EntityRecord>,
}

impl PriceReport {
    /// Builds a report from `set`, stamping it with `generated_at`.
    #[must_use]
    pub fn from_result_set<Tz>(set: ResultSet, generated_at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            update_timestamp: generated_at.format(REPORT_TIMESTAMP_FORMAT).to_string(),
            date: set.shared_date,
            entities: set.records,
        }
    }
}
