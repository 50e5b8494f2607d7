//! Pubtrail Domain Layer
//!
//! This crate contains the data model shared by every other pubtrail crate and
//! the trait interfaces for the collaborators the core consumes but never
//! implements itself (page loading and document querying).
//!
//! ## Key Concepts
//!
//! - **ArticleLink**: Opaque locator for one article page
//! - **LifecycleTimestamps**: Raw received/accepted/published/issue-date strings
//! - **ArticleRecord**: The canonical record extracted from one page
//! - **ExtractionOutcome**: Exactly one per input link, success or failure
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Extraction lives in `pubtrail-extractor`
//! - Temporal feature derivation lives in `pubtrail-features`
//! - The only dependency is `serde`, because records are persisted as JSON

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod outcome;
pub mod traits;

// Re-exports for convenience
pub use article::{ArticleLink, ArticleRecord, LifecycleTimestamps, TimestampSlot};
pub use outcome::ExtractionOutcome;
pub use traits::{DocumentQuery, ElementHandle, PageLoader};
