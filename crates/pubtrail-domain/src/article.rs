//! Article module - the records exchanged between extraction and feature derivation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque locator (URL) identifying one article page
///
/// Created by link discovery or read from an input file, consumed once by
/// the layout resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleLink(String);

impl ArticleLink {
    /// Create a link from any string-like value
    ///
    /// # Examples
    ///
    /// ```
    /// use pubtrail_domain::ArticleLink;
    ///
    /// let link = ArticleLink::new("https://www.nature.com/articles/s41586-020-2012-7");
    /// assert_eq!(link.as_str(), "https://www.nature.com/articles/s41586-020-2012-7");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Borrow the underlying URL
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleLink {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ArticleLink {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// One of the four lifecycle slots of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampSlot {
    /// Manuscript received by the journal
    Received,

    /// Manuscript accepted for publication
    Accepted,

    /// Published online
    Published,

    /// Date of the print/online issue
    IssueDate,
}

impl TimestampSlot {
    /// All slots in lifecycle order
    pub const ALL: [TimestampSlot; 4] = [
        TimestampSlot::Received,
        TimestampSlot::Accepted,
        TimestampSlot::Published,
        TimestampSlot::IssueDate,
    ];

    /// Heading text used by article pages for this slot
    pub fn label(&self) -> &'static str {
        match self {
            TimestampSlot::Received => "Received",
            TimestampSlot::Accepted => "Accepted",
            TimestampSlot::Published => "Published",
            TimestampSlot::IssueDate => "Issue Date",
        }
    }

    /// Exact, case-sensitive lookup of a heading
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

/// Raw lifecycle date strings as they appeared on the page
///
/// An empty string means the page did not report that slot. No ordering is
/// enforced between slots: a page may report `issuedate` without `received`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleTimestamps {
    /// Received date
    #[serde(default)]
    pub received: String,

    /// Accepted date
    #[serde(default)]
    pub accepted: String,

    /// Published date
    #[serde(default)]
    pub published: String,

    /// Issue date
    #[serde(default)]
    pub issuedate: String,
}

impl LifecycleTimestamps {
    /// Raw value of a slot (empty if absent)
    pub fn get(&self, slot: TimestampSlot) -> &str {
        match slot {
            TimestampSlot::Received => &self.received,
            TimestampSlot::Accepted => &self.accepted,
            TimestampSlot::Published => &self.published,
            TimestampSlot::IssueDate => &self.issuedate,
        }
    }

    /// Overwrite a slot
    pub fn set(&mut self, slot: TimestampSlot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            TimestampSlot::Received => self.received = value,
            TimestampSlot::Accepted => self.accepted = value,
            TimestampSlot::Published => self.published = value,
            TimestampSlot::IssueDate => self.issuedate = value,
        }
    }

    /// Number of slots holding a non-empty value
    pub fn filled(&self) -> usize {
        TimestampSlot::ALL
            .iter()
            .filter(|slot| !self.get(**slot).is_empty())
            .count()
    }
}

/// Canonical metadata for one successfully resolved article page
///
/// Created once by the layout resolver and never mutated afterwards. `doi`
/// and any `time` slot may be empty; absence is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Article title
    pub title: String,

    /// Page the record was extracted from
    pub link: ArticleLink,

    /// DOI link target (empty if the page had none)
    #[serde(default)]
    pub doi: String,

    /// Lifecycle timestamps
    #[serde(default)]
    pub time: LifecycleTimestamps,
}

impl ArticleRecord {
    /// Create a record
    pub fn new(
        title: impl Into<String>,
        link: ArticleLink,
        doi: impl Into<String>,
        time: LifecycleTimestamps,
    ) -> Self {
        Self {
            title: title.into(),
            link,
            doi: doi.into(),
            time,
        }
    }
}
