//! Pubtrail Extractor
//!
//! Harvests article metadata from journal pages whose structure changed over
//! time.
//!
//! # Overview
//!
//! A publisher serves several generations of article page side by side. Each
//! generation is described by a [`Layout`]; the [`LayoutResolver`] tries them
//! in priority order and extracts with the first whose title element is
//! present. A page no layout recognizes becomes a failure, never an error.
//!
//! # Architecture
//!
//! ```text
//! links → BatchRunner → PageLoader → HtmlDocument → LayoutResolver → BatchReport
//! ```
//!
//! - [`BatchRunner`] processes links sequentially and partitions outcomes.
//! - [`HttpLoader`] loads pages with `reqwest`; any [`PageLoader`] works.
//! - [`discover_links`] walks a paged listing to produce the link list.
//!
//! # Example Usage
//!
//! ```
//! use pubtrail_domain::{ArticleLink, ExtractionOutcome};
//! use pubtrail_extractor::{ExtractorConfig, HtmlDocument, LayoutResolver};
//!
//! let resolver = LayoutResolver::from_config(&ExtractorConfig::default()).unwrap();
//! let doc = HtmlDocument::parse(r#"<h1 class="c-article-title">Spin ice</h1>"#);
//! let link = ArticleLink::new("https://www.nature.com/articles/nature06433");
//!
//! match resolver.resolve(&doc, &link) {
//!     ExtractionOutcome::Success(record) => assert_eq!(record.title, "Spin ice"),
//!     ExtractionOutcome::Failure(_) => unreachable!(),
//! }
//! ```
//!
//! [`PageLoader`]: pubtrail_domain::PageLoader

#![warn(missing_docs)]

mod batch;
mod config;
mod discovery;
mod error;
mod fetch;
mod html;
mod layout;
mod resolver;


pub use batch::{BatchReport, BatchRunner};
pub use config::{DiscoveryConfig, ExtractorConfig};
pub use discovery::{discover_links, scan_listing, DiscoveryReport, ListingPage};
pub use error::ExtractorError;
pub use fetch::HttpLoader;
pub use html::{is_valid_selector, normalize_ws, resolve_href, HtmlDocument, HtmlElement};
pub use layout::{
    BibField, DoiLocator, ExtractedFields, FieldSelector, Layout, ReadMode, SelectorLayout,
};
pub use resolver::LayoutResolver;
