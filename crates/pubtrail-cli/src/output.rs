//! Output formatting for the CLI.

use colored::*;
use pubtrail_domain::ArticleLink;
use pubtrail_extractor::BatchReport;
use pubtrail_features::{DayDelta, FeatureRow};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a harvest overview with per-record timestamp coverage.
    pub fn harvest_report(&self, report: &BatchReport) -> String {
        if report.total() == 0 {
            return self.warning("No article links to harvest.");
        }

        let mut lines = Vec::new();
        if report.success_count() > 0 {
            let mut builder = Builder::default();
            builder.push_record(["Title", "DOI", "Received", "Accepted", "Published", "Issue Date"]);
            for record in &report.successes {
                builder.push_record([
                    truncate(&record.title, 60),
                    record.doi.clone(),
                    record.time.received.clone(),
                    record.time.accepted.clone(),
                    record.time.published.clone(),
                    record.time.issuedate.clone(),
                ]);
            }
            lines.push(self.table(builder));
        }

        for link in &report.failures {
            lines.push(self.error(&format!("No known layout or load failed: {}", link)));
        }

        let (successes, failures) = (report.success_count(), report.failure_count());
        let total = report.total();
        lines.push(self.success(&format!("{}/{} successful.", successes, total)));
        let failed = format!("{}/{} failed.", failures, total);
        lines.push(if failures == 0 { self.info(&failed) } else { self.warning(&failed) });

        lines.join("\n")
    }

    /// Format a discovery overview.
    pub fn discovery_report(&self, links: &[ArticleLink], pages: usize, failed: &[ArticleLink]) -> String {
        let mut lines = vec![self.success(&format!(
            "Found {} article link(s) on {} page(s)",
            links.len(),
            pages
        ))];
        for page in failed {
            lines.push(self.error(&format!("Listing page failed: {}", page)));
        }
        lines.join("\n")
    }

    /// Format the feature table summary: counts of computable deltas.
    pub fn feature_summary(&self, rows: &[FeatureRow]) -> String {
        if rows.is_empty() {
            return self.warning("No records found.");
        }

        let count = |get: fn(&FeatureRow) -> DayDelta| {
            rows.iter()
                .filter(|row| matches!(get(row), DayDelta::Days(_)))
                .count()
                .to_string()
        };

        let mut builder = Builder::default();
        builder.push_record(["Span", "Computable", "Rows"]);
        let total = rows.len().to_string();
        builder.push_record(["received - accepted".to_string(), count(|r| r.received_to_accepted), total.clone()]);
        builder.push_record(["accepted - published".to_string(), count(|r| r.accepted_to_published), total.clone()]);
        builder.push_record(["published - issued".to_string(), count(|r| r.published_to_issued), total]);

        self.table(builder)
    }

    /// Format a "file written" message.
    pub fn saved(&self, what: &str, path: &Path) -> String {
        self.success(&format!("{} saved: {}", what, path.display()))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubtrail_domain::{ArticleRecord, LifecycleTimestamps};
    use pubtrail_features::FeatureCalculator;

    fn record(title: &str, received: &str, accepted: &str) -> ArticleRecord {
        ArticleRecord::new(
            title,
            ArticleLink::new("https://n.com/a"),
            "https://doi.org/10.1/a",
            LifecycleTimestamps {
                received: received.to_string(),
                accepted: accepted.to_string(),
                ..LifecycleTimestamps::default()
            },
        )
    }

    #[test]
    fn test_harvest_report() {
        let report = BatchReport {
            successes: vec![record("Spin ice", "01 January 2020", "")],
            failures: vec![ArticleLink::new("https://n.com/broken")],
        };

        let output = Formatter::new(false).harvest_report(&report);
        assert!(output.contains("Spin ice"));
        assert!(output.contains("Issue Date"));
        assert!(output.contains("✗ No known layout or load failed: https://n.com/broken"));
        assert!(output.contains("✓ 1/2 successful."));
        assert!(output.contains("⚠ 1/2 failed."));
    }

    #[test]
    fn test_empty_harvest() {
        let output = Formatter::new(false).harvest_report(&BatchReport::default());
        assert_eq!(output, "⚠ No article links to harvest.");
    }

    #[test]
    fn test_feature_summary_counts_computable_spans() {
        let rows = FeatureCalculator::new().compute_all(&[
            record("A", "01 January 2020", "15 January 2020"),
            record("B", "", "15 January 2020"),
        ]);

        let output = Formatter::new(false).feature_summary(&rows);
        let line = output
            .lines()
            .find(|line| line.contains("received - accepted"))
            .unwrap();
        assert!(line.contains(" 1 "));
        assert!(line.contains(" 2 "));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
