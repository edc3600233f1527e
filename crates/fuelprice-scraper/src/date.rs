//! Update-date lookup.
//!
//! Pages state their update date in different places: the city page in a
//! section heading ("... w dniu 2025-03-04"), the regional pages in a table
//! header cell. [`locate_date`] runs an ordered list of [`DateStrategy`]s and
//! returns the first ISO date found.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::document::Document;
use crate::dom::{element_text, is_heading};

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid ISO date regex"));
static HEADER_CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid th selector"));

/// One place to look for the update date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStrategy<'a> {
    /// Headings `h1`..`h6`. With a `cue`, the heading must contain it
    /// (case-insensitive) and the date must follow it.
    Headings { cue: Option<&'a str> },
    /// Table header cells (`th`).
    HeaderCells,
}

impl DateStrategy<'_> {
    /// Short label for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DateStrategy::Headings { .. } => "headings",
            DateStrategy::HeaderCells => "header_cells",
        }
    }
}

/// A located date and the strategy that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedDate {
    pub date: String,
    pub strategy: &'static str,
}

/// Tries `strategies` in order; the first element in document order that
/// matches wins. Returns `None` when no strategy matches.
#[must_use]
pub fn locate_date(document: &Document, strategies: &[DateStrategy<'_>]) -> Option<LocatedDate> {
    strategies.iter().find_map(|strategy| {
        let date = match strategy {
            DateStrategy::Headings { cue } => date_in_headings(document, *cue),
            DateStrategy::HeaderCells => date_in_header_cells(document),
        }?;
        Some(LocatedDate {
            date,
            strategy: strategy.label(),
        })
    })
}

fn date_in_headings(document: &Document, cue: Option<&str>) -> Option<String> {
    document
        .html()
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_heading(*el))
        .find_map(|heading| {
            let text = element_text(heading);
            match cue {
                Some(cue) => date_after_cue(&text, cue),
                None => first_iso_date(&text),
            }
        })
}

fn date_in_header_cells(document: &Document) -> Option<String> {
    document
        .html()
        .select(&HEADER_CELL_SELECTOR)
        .find_map(|cell| first_iso_date(&element_text(cell)))
}

fn first_iso_date(text: &str) -> Option<String> {
    ISO_DATE_RE.find(text).map(|m| m.as_str().to_owned())
}

/// Date appearing after the first case-insensitive occurrence of `cue`.
fn date_after_cue(text: &str, cue: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let cue_lower = cue.to_lowercase();
    // Lowercasing can change byte lengths for some scripts; only trust the
    // offset when both strings kept the same length.
    let pos = lower.find(&cue_lower)?;
    let tail = if lower.len() == text.len() {
        text.get(pos + cue_lower.len()..).unwrap_or(text)
    } else {
        text
    };
    first_iso_date(tail)
}

#[cfg(test)]
#[path = "date_test.rs"]
mod tests;
