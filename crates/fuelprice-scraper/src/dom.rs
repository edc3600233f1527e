//! Small tree-walking helpers shared by the locators and row extractors.
//!
//! Rows and cells are read through direct children rather than CSS
//! descendant selectors so that layout tables wrapping the price table do
//! not leak their rows or cells into the result.

use scraper::ElementRef;

/// Element text with runs of whitespace (including `&nbsp;`) collapsed to a
/// single space and the ends trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `true` for `h1`..`h6`.
pub(crate) fn is_heading(element: ElementRef<'_>) -> bool {
    matches!(
        element.value().name(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// Direct element children with the given tag name, in document order.
pub(crate) fn child_elements<'a>(
    parent: ElementRef<'a>,
    names: &'a [&'a str],
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| names.contains(&el.value().name()))
}

/// Data cells of a row (`td` only).
pub(crate) fn data_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    child_elements(row, &["td"]).collect()
}

/// Every element strictly below `element`, in document order.
pub(crate) fn descendant_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Returns `true` when a row wraps another row, i.e. belongs to a layout table.
pub(crate) fn has_nested_row(row: ElementRef<'_>) -> bool {
    descendant_elements(row).any(|el| el.value().name() == "tr")
}
