//! Batch extraction over a list of article links

use crate::html::HtmlDocument;
use crate::resolver::LayoutResolver;
use pubtrail_domain::{ArticleLink, ArticleRecord, ExtractionOutcome, PageLoader};
use tracing::{error, info, warn};

/// Partitioned outcomes of a batch run
///
/// `successes.len() + failures.len()` always equals the number of input links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records in input order
    pub successes: Vec<ArticleRecord>,

    /// Links that failed to load or matched no layout, in input order
    pub failures: Vec<ArticleLink>,
}

impl BatchReport {
    /// Number of links processed
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Number of extracted records
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Number of failed links
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Add one outcome to the matching partition
    pub fn push(&mut self, outcome: ExtractionOutcome) {
        match outcome {
            ExtractionOutcome::Success(record) => self.successes.push(record),
            ExtractionOutcome::Failure(link) => self.failures.push(link),
        }
    }

    /// Two-line overview, e.g. `"3/4 successful.\n1/4 failed."`
    pub fn summary(&self) -> String {
        let total = self.total();
        format!(
            "{}/{} successful.\n{}/{} failed.",
            self.success_count(),
            total,
            self.failure_count(),
            total
        )
    }
}

/// Runs the layout resolver over every link, one page at a time
pub struct BatchRunner<L: PageLoader> {
    loader: L,
    resolver: LayoutResolver<HtmlDocument>,
}

impl<L: PageLoader> BatchRunner<L> {
    /// Create a runner
    pub fn new(loader: L, resolver: LayoutResolver<HtmlDocument>) -> Self {
        Self { loader, resolver }
    }

    /// Resolve a single link
    ///
    /// A load error becomes a failure for the link; it never aborts the batch.
    pub async fn run_one(&self, link: &ArticleLink) -> ExtractionOutcome {
        match self.loader.load(link).await {
            Ok(markup) => self.resolve_markup(&markup, link),
            Err(e) => {
                warn!("Failed to load {}: {}", link, e);
                ExtractionOutcome::Failure(link.clone())
            }
        }
    }

    /// Resolve every link in order and partition the outcomes
    pub async fn run(&self, links: &[ArticleLink]) -> BatchReport {
        info!("Harvesting {} article pages", links.len());

        let mut report = BatchReport::default();
        for link in links {
            let outcome = self.run_one(link).await;
            match &outcome {
                ExtractionOutcome::Success(record) => info!("[SUCCESS]: {}", record.title),
                ExtractionOutcome::Failure(link) => error!("[ERROR]: {}", link),
            }
            report.push(outcome);
        }

        for line in report.summary().lines() {
            info!("{}", line);
        }
        report
    }

    // The parsed document is not Send, so it must not live across an await.
    fn resolve_markup(&self, markup: &str, link: &ArticleLink) -> ExtractionOutcome {
        let doc = HtmlDocument::parse(markup);
        self.resolver.resolve(&doc, link)
    }
}
