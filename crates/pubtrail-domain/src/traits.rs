//! Trait definitions for external interactions
//!
//! These traits define the boundaries between extraction logic and the
//! infrastructure that loads and parses pages. Implementations live in other
//! crates (`pubtrail-extractor` ships an HTML and an HTTP implementation).

use crate::ArticleLink;

/// Read-only handle to one element of a loaded document
///
/// Sub-queries are scoped to the element's descendants.
pub trait ElementHandle: Sized {
    /// First descendant matching a CSS selector
    fn query_selector(&self, selector: &str) -> Option<Self>;

    /// All descendants matching a CSS selector, in document order
    fn query_selector_all(&self, selector: &str) -> Vec<Self>;

    /// Rendered text with whitespace collapsed and trimmed
    fn text(&self) -> String;

    /// Inner markup, untouched
    fn html(&self) -> String;

    /// Raw attribute value
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Query capability over a loaded document
///
/// Implemented by the infrastructure layer (`pubtrail-extractor::html`)
pub trait DocumentQuery {
    /// Element handle type borrowed from the document
    type Element<'a>: ElementHandle
    where
        Self: 'a;

    /// First element matching a CSS selector
    fn query_selector(&self, selector: &str) -> Option<Self::Element<'_>>;

    /// All elements matching a CSS selector, in document order
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element<'_>>;
}

/// Trait for loading the markup behind an article link
///
/// Implemented by the infrastructure layer (`pubtrail-extractor::fetch`).
/// This is the only suspension point of a batch run.
#[allow(async_fn_in_trait)]
pub trait PageLoader {
    /// Error type for load operations
    type Error: std::fmt::Display;

    /// Load the page behind `link` and return its markup
    async fn load(&self, link: &ArticleLink) -> Result<String, Self::Error>;
}
