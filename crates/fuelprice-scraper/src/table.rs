//! Locating the price table and reading its header and body rows.

use scraper::ElementRef;

use crate::document::Document;
use crate::dom::{child_elements, element_text, has_nested_row, is_heading};

/// How a price table was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    /// First table after the section heading.
    SectionHeading,
    /// First table carrying the fallback class marker.
    ClassMarker,
}

/// A located price table.
#[derive(Debug, Clone, Copy)]
pub struct LocatedTable<'d> {
    pub element: ElementRef<'d>,
    pub source: TableSource,
}

/// Finds the city table of a multi-entity page.
///
/// Looks for the first heading whose text contains `section_cue`
/// (case-insensitive) and returns the first `table` that follows it in
/// document order, wherever it sits in the tree. Without such a heading, or
/// with no table after it, falls back to the first table whose `class`
/// list contains `fallback_class`.
#[must_use]
pub fn locate_table<'d>(
    document: &'d Document,
    section_cue: &str,
    fallback_class: &str,
) -> Option<LocatedTable<'d>> {
    table_after_heading(document, section_cue)
        .map(|element| LocatedTable {
            element,
            source: TableSource::SectionHeading,
        })
        .or_else(|| {
            table_with_class(document, fallback_class).map(|element| LocatedTable {
                element,
                source: TableSource::ClassMarker,
            })
        })
}

fn table_after_heading<'d>(document: &'d Document, cue: &str) -> Option<ElementRef<'d>> {
    let cue = cue.to_lowercase();
    let mut heading_seen = false;

    for element in document
        .html()
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
    {
        if heading_seen {
            if element.value().name() == "table" {
                return Some(element);
            }
        } else if is_heading(element) && element_text(element).to_lowercase().contains(&cue) {
            heading_seen = true;
        }
    }

    None
}

fn table_with_class<'d>(document: &'d Document, class: &str) -> Option<ElementRef<'d>> {
    if class.is_empty() {
        return None;
    }
    document
        .html()
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table" && el.value().classes().any(|c| c == class))
}

/// Every row of a single-entity page that could be a price row, in
/// document order. Rows of layout tables that wrap other rows are left out.
#[must_use]
pub fn candidate_rows(document: &Document) -> Vec<ElementRef<'_>> {
    document
        .html()
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr" && !has_nested_row(*el))
        .collect()
}

/// Header texts of `table`: the first `thead` row, or failing that the first
/// row that carries `th` cells.
#[must_use]
pub fn header_cells(table: ElementRef<'_>) -> Vec<String> {
    let from_thead = child_elements(table, &["thead"])
        .flat_map(|thead| child_elements(thead, &["tr"]))
        .next();

    let header_row = from_thead.or_else(|| {
        table_rows(table).into_iter().find(|row| {
            child_elements(*row, &["th"]).next().is_some()
        })
    });

    header_row
        .map(|row| {
            child_elements(row, &["th", "td"])
                .map(element_text)
                .collect()
        })
        .unwrap_or_default()
}

/// Rows inside the table's `tbody` sections, in document order.
///
/// The HTML parser wraps bare `tr` children of a table in an implicit
/// `tbody`, so this covers tables written without one.
#[must_use]
pub fn body_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    child_elements(table, &["tbody"])
        .flat_map(|tbody| child_elements(tbody, &["tr"]))
        .collect()
}

fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    child_elements(table, &["thead", "tbody", "tfoot"])
        .flat_map(|section| child_elements(section, &["tr"]))
        .collect()
}
