//! Per-record temporal features

use crate::config::FeatureConfig;
use crate::date::{CalendarValue, DateParser, MonthYear};
use crate::distance::distance;
use pubtrail_domain::{ArticleRecord, TimestampSlot};
use std::fmt;
use tracing::debug;

/// Day span between two lifecycle events
///
/// `Days(0)` means the span was zero or negative; `NotComputable` means an
/// endpoint was missing or unparseable. The two are kept apart here even when
/// a table renders them the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayDelta {
    /// Non-negative number of days
    Days(u32),

    /// At least one endpoint was absent
    NotComputable,
}

impl DayDelta {
    /// Render the delta, using `missing` for `NotComputable`
    pub fn render(&self, missing: &str) -> String {
        match self {
            DayDelta::Days(days) => days.to_string(),
            DayDelta::NotComputable => missing.to_string(),
        }
    }
}

impl fmt::Display for DayDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayDelta::Days(days) => write!(f, "{}", days),
            DayDelta::NotComputable => Ok(()),
        }
    }
}

/// Read-only projection of one record for tabular export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    /// Article title
    pub title: String,

    /// DOI link target
    pub doi: String,

    /// Month/year of the received date
    pub received: MonthYear,

    /// Month/year of the accepted date
    pub accepted: MonthYear,

    /// Month/year of the published date
    pub published: MonthYear,

    /// Month/year of the issue date
    pub issued: MonthYear,

    /// Days from received to accepted
    pub received_to_accepted: DayDelta,

    /// Days from accepted to published
    pub accepted_to_published: DayDelta,

    /// Days from published to issue date
    pub published_to_issued: DayDelta,
}

impl FeatureRow {
    /// Column values in table order
    pub fn columns(&self, config: &FeatureConfig) -> Vec<String> {
        let missing = config.missing_delta.as_str();
        vec![
            self.title.clone(),
            self.doi.clone(),
            self.received.month.clone(),
            self.received.year.clone(),
            self.accepted.month.clone(),
            self.accepted.year.clone(),
            self.published.month.clone(),
            self.published.year.clone(),
            self.issued.month.clone(),
            self.issued.year.clone(),
            self.received_to_accepted.render(missing),
            self.accepted_to_published.render(missing),
            self.published_to_issued.render(missing),
        ]
    }
}

/// Derives [`FeatureRow`]s from [`ArticleRecord`]s
///
/// Stateless: the same record always yields the same row.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureCalculator {
    parser: DateParser,
}

impl FeatureCalculator {
    /// Create a calculator
    pub fn new() -> Self {
        Self {
            parser: DateParser::new(),
        }
    }

    /// Compute the feature row for one record
    pub fn compute(&self, record: &ArticleRecord) -> FeatureRow {
        let time = &record.time;
        let month_year = |slot| self.parser.month_year(time.get(slot));
        let parsed = |slot| self.parser.parse_full(time.get(slot));

        let received = parsed(TimestampSlot::Received);
        let accepted = parsed(TimestampSlot::Accepted);
        let published = parsed(TimestampSlot::Published);
        let issued = parsed(TimestampSlot::IssueDate);

        FeatureRow {
            title: record.title.clone(),
            doi: record.doi.clone(),
            received: month_year(TimestampSlot::Received),
            accepted: month_year(TimestampSlot::Accepted),
            published: month_year(TimestampSlot::Published),
            issued: month_year(TimestampSlot::IssueDate),
            received_to_accepted: delta(&received, &accepted),
            accepted_to_published: delta(&accepted, &published),
            published_to_issued: delta(&published, &issued),
        }
    }

    /// Compute rows for many records, preserving order
    pub fn compute_all(&self, records: &[ArticleRecord]) -> Vec<FeatureRow> {
        let rows: Vec<FeatureRow> = records.iter().map(|r| self.compute(r)).collect();

        let incomplete = rows
            .iter()
            .filter(|row| {
                [
                    row.received_to_accepted,
                    row.accepted_to_published,
                    row.published_to_issued,
                ]
                .contains(&DayDelta::NotComputable)
            })
            .count();
        debug!(
            "Computed {} feature rows ({} with at least one missing delta)",
            rows.len(),
            incomplete
        );

        rows
    }
}

fn delta(from: &CalendarValue, to: &CalendarValue) -> DayDelta {
    if from.is_resolved() && to.is_resolved() {
        DayDelta::Days(distance(from, to))
    } else {
        DayDelta::NotComputable
    }
}
