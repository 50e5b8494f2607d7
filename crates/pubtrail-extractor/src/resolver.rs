//! Layout resolution: the ordered fallback over known page structures

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::html::resolve_href;
use crate::layout::Layout;
use pubtrail_domain::{ArticleLink, ArticleRecord, DocumentQuery, ExtractionOutcome};
use tracing::{debug, warn};

/// Tries each layout in priority order and extracts with the first match
///
/// Only the first matching layout is used. Fields it cannot locate stay
/// empty; the resolver does not fall through to later layouts for them.
pub struct LayoutResolver<D: DocumentQuery> {
    layouts: Vec<Box<dyn Layout<D>>>,
}

impl<D: DocumentQuery> LayoutResolver<D> {
    /// Create a resolver from a non-empty priority list
    pub fn new(layouts: Vec<Box<dyn Layout<D>>>) -> Result<Self, ExtractorError> {
        if layouts.is_empty() {
            return Err(ExtractorError::Config(
                "layout resolver needs at least one layout".to_string(),
            ));
        }
        Ok(Self { layouts })
    }

    /// Create a resolver from the configured selector layouts
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let layouts = config
            .layouts
            .iter()
            .cloned()
            .map(|layout| Box::new(layout) as Box<dyn Layout<D>>)
            .collect();
        Self::new(layouts)
    }

    /// Layout names in priority order
    pub fn layout_names(&self) -> Vec<&str> {
        self.layouts.iter().map(|layout| layout.name()).collect()
    }

    /// First layout whose title element is present
    pub fn matching_layout(&self, doc: &D) -> Option<&dyn Layout<D>> {
        self.layouts
            .iter()
            .find(|layout| layout.matches(doc))
            .map(|layout| layout.as_ref())
    }

    /// Resolve one loaded page into an outcome
    ///
    /// A relative DOI link is made absolute against `link`.
    pub fn resolve(&self, doc: &D, link: &ArticleLink) -> ExtractionOutcome {
        let Some(layout) = self.matching_layout(doc) else {
            warn!("No known layout matches {}", link);
            return ExtractionOutcome::Failure(link.clone());
        };

        debug!("Layout '{}' matches {}", layout.name(), link);
        let fields = layout.extract(doc);
        debug!(
            "Extracted '{}' with {} of 4 timestamps",
            fields.title,
            fields.time.filled()
        );

        let doi = resolve_href(link.as_str(), &fields.doi);
        ExtractionOutcome::Success(ArticleRecord::new(
            fields.title,
            link.clone(),
            doi,
            fields.time,
        ))
    }
}
