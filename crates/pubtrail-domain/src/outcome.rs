//! Extraction outcomes

use crate::{ArticleLink, ArticleRecord};

/// Result of resolving one article page
///
/// Exactly one outcome is produced per input link, so a batch always has as
/// many outcomes as it had links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// A layout matched and a record was extracted
    Success(ArticleRecord),

    /// No layout matched or the page could not be loaded
    Failure(ArticleLink),
}

impl ExtractionOutcome {
    /// Whether this outcome carries a record
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Success(_))
    }

    /// The link this outcome belongs to
    pub fn link(&self) -> &ArticleLink {
        match self {
            ExtractionOutcome::Success(record) => &record.link,
            ExtractionOutcome::Failure(link) => link,
        }
    }
}
