//! Fuel price extraction from the regional and city price pages.
//!
//! The extraction side ([`engine`] and the locator/mapper/row modules it
//! composes) is synchronous and free of I/O. [`client`] is the network
//! collaborator that feeds it raw markup.

pub mod client;
pub mod columns;
pub mod date;
pub mod document;
mod dom;
pub mod engine;
pub mod error;
pub mod events;
pub mod price;
mod retry;
pub mod rows;
pub mod table;

pub use client::PageClient;
pub use columns::{build_column_map, ColumnMap, MappingError};
pub use document::{Document, Shape};
pub use engine::{Extraction, ExtractionEngine, PageProfile};
pub use error::ScraperError;
pub use events::{EventSink, ExtractionEvent, NoopSink, TracingSink};
pub use price::parse_price;
