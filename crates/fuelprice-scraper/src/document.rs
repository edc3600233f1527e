use scraper::Html;

/// Layout of a price page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One region per page; prices sit in marker rows, one fuel per row.
    SingleEntity,
    /// A table with one city per row and one fuel per column.
    MultiEntity,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::SingleEntity => write!(f, "single-entity"),
            Shape::MultiEntity => write!(f, "multi-entity"),
        }
    }
}

/// A parsed page together with the layout it is expected to have.
///
/// Parsing is lenient: any input, including an empty string, yields a
/// document. The tree is never mutated after construction.
pub struct Document {
    html: Html,
    shape: Shape,
}

impl Document {
    #[must_use]
    pub fn parse(markup: &str, shape: Shape) -> Self {
        Self {
            html: Html::parse_document(markup),
            shape,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn html(&self) -> &Html {
        &self.html
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
