//! Layout strategies for known article page structures
//!
//! A layout knows the selectors of one page structure. Layouts are tried in
//! priority order by the [`LayoutResolver`](crate::LayoutResolver); the first
//! whose title selector resolves is used for the whole page.

use crate::html::is_valid_selector;
use pubtrail_domain::{DocumentQuery, ElementHandle, LifecycleTimestamps, TimestampSlot};
use serde::{Deserialize, Serialize};

/// Uniform capability of a page layout
pub trait Layout<D: DocumentQuery> {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether the document has this layout's title element
    fn matches(&self, doc: &D) -> bool;

    /// Extract whatever fields this layout can find
    ///
    /// Never fails: fields that cannot be located stay empty.
    fn extract(&self, doc: &D) -> ExtractedFields;
}

/// Fields read from a page by one layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Article title
    pub title: String,

    /// DOI link target, as found on the page
    pub doi: String,

    /// Lifecycle timestamps
    pub time: LifecycleTimestamps,
}

/// Heading vocabulary of the bibliographic field containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BibField {
    /// One of the four lifecycle slots
    Timestamp(TimestampSlot),

    /// The DOI row
    Doi,
}

impl BibField {
    /// Exact, case-sensitive lookup; unknown headings yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "DOI" {
            return Some(BibField::Doi);
        }
        TimestampSlot::from_label(label).map(BibField::Timestamp)
    }
}

/// How an element's content is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// Rendered text, whitespace collapsed
    Text,
    /// Inner markup, trimmed
    Html,
}

/// A selector together with how to read what it finds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    /// CSS selector
    pub selector: String,

    /// Read mode
    #[serde(default = "default_read")]
    pub read: ReadMode,
}

fn default_read() -> ReadMode {
    ReadMode::Text
}

impl FieldSelector {
    /// Create a field selector
    pub fn new(selector: impl Into<String>, read: ReadMode) -> Self {
        Self {
            selector: selector.into(),
            read,
        }
    }

    fn read<E: ElementHandle>(&self, element: &E) -> String {
        match self.read {
            ReadMode::Text => element.text(),
            ReadMode::Html => element.html().trim().to_string(),
        }
    }
}

/// Where a layout keeps the DOI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoiLocator {
    /// In a field container labelled `DOI`
    InContainer {
        /// Link selector inside the container
        selector: String,
        /// Attribute holding the link target
        #[serde(default = "default_attribute")]
        attribute: String,
    },

    /// In a standalone heading/link pair elsewhere on the page
    Standalone {
        /// Heading selector
        heading: String,
        /// Text the heading must have
        heading_text: String,
        /// Link selector
        link: String,
        /// Attribute holding the link target
        #[serde(default = "default_attribute")]
        attribute: String,
    },
}

fn default_attribute() -> String {
    "href".to_string()
}

impl DoiLocator {
    fn selectors(&self) -> Vec<&str> {
        match self {
            DoiLocator::InContainer { selector, .. } => vec![selector.as_str()],
            DoiLocator::Standalone { heading, link, .. } => vec![heading.as_str(), link.as_str()],
        }
    }
}

/// Selector-driven layout, configurable from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorLayout {
    /// Layout name
    pub name: String,

    /// Repeated bibliographic-field container
    pub container: String,

    /// Heading inside each container
    pub label: String,

    /// Title element; its presence decides whether the layout matches
    pub title: FieldSelector,

    /// Date value inside each container
    pub value: FieldSelector,

    /// DOI location, if the layout has one
    #[serde(default)]
    pub doi: Option<DoiLocator>,
}

impl SelectorLayout {
    /// Article page layout in use today
    pub fn current() -> Self {
        Self {
            name: "current".to_string(),
            container: ".c-bibliographic-information div ul li.c-bibliographic-information__list-item"
                .to_string(),
            label: "h4".to_string(),
            title: FieldSelector::new(".c-article-title", ReadMode::Text),
            value: FieldSelector::new(".c-bibliographic-information__value time", ReadMode::Html),
            doi: Some(DoiLocator::InContainer {
                selector: ".c-bibliographic-information__value a".to_string(),
                attribute: default_attribute(),
            }),
        }
    }

    /// Layout of older article pages
    pub fn legacy() -> Self {
        Self {
            name: "legacy".to_string(),
            container: "#article-info-content .grid div".to_string(),
            label: "h4".to_string(),
            title: FieldSelector::new("h1[itemprop='name headline']", ReadMode::Html),
            value: FieldSelector::new("p time", ReadMode::Html),
            doi: Some(DoiLocator::Standalone {
                heading: "#article-info-content h3.strong.mb4 abbr".to_string(),
                heading_text: "DOI".to_string(),
                link: "#article-info-content p.standard-space-below.text14 a".to_string(),
                attribute: default_attribute(),
            }),
        }
    }

    /// Default priority list, newest layout first
    pub fn defaults() -> Vec<Self> {
        vec![Self::current(), Self::legacy()]
    }

    /// Validate names and selectors
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("layout name must not be empty".to_string());
        }

        let mut selectors = vec![
            self.container.as_str(),
            self.label.as_str(),
            self.title.selector.as_str(),
            self.value.selector.as_str(),
        ];
        if let Some(doi) = &self.doi {
            selectors.extend(doi.selectors());
        }

        for selector in selectors {
            if !is_valid_selector(selector) {
                return Err(format!(
                    "layout '{}' has invalid selector '{}'",
                    self.name, selector
                ));
            }
        }
        Ok(())
    }

    fn read_containers<D: DocumentQuery>(&self, doc: &D, fields: &mut ExtractedFields) {
        for container in doc.query_selector_all(&self.container) {
            let Some(label) = container.query_selector(&self.label) else {
                continue;
            };

            match BibField::from_label(&label.text()) {
                Some(BibField::Timestamp(slot)) => {
                    if let Some(value) = container.query_selector(&self.value.selector) {
                        fields.time.set(slot, self.value.read(&value));
                    }
                }
                Some(BibField::Doi) => {
                    if let Some(DoiLocator::InContainer { selector, attribute }) = &self.doi {
                        if let Some(href) = container
                            .query_selector(selector)
                            .and_then(|link| link.attribute(attribute))
                        {
                            fields.doi = href;
                        }
                    }
                }
                None => {}
            }
        }
    }

    fn read_standalone_doi<D: DocumentQuery>(&self, doc: &D) -> Option<String> {
        let Some(DoiLocator::Standalone {
            heading,
            heading_text,
            link,
            attribute,
        }) = &self.doi
        else {
            return None;
        };

        let heading = doc.query_selector(heading)?;
        if heading.text() != *heading_text {
            return None;
        }
        doc.query_selector(link)?.attribute(attribute)
    }
}

impl<D: DocumentQuery> Layout<D> for SelectorLayout {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, doc: &D) -> bool {
        doc.query_selector(&self.title.selector).is_some()
    }

    fn extract(&self, doc: &D) -> ExtractedFields {
        let mut fields = ExtractedFields::default();

        if let Some(title) = doc.query_selector(&self.title.selector) {
            fields.title = self.title.read(&title);
        }

        self.read_containers(doc, &mut fields);

        if let Some(doi) = self.read_standalone_doi(doc) {
            fields.doi = doi;
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;

    #[test]
    fn test_bib_field_vocabulary() {
        assert_eq!(BibField::from_label("DOI"), Some(BibField::Doi));
        assert_eq!(
            BibField::from_label("Issue Date"),
            Some(BibField::Timestamp(TimestampSlot::IssueDate))
        );
        assert_eq!(BibField::from_label("doi"), None);
        assert_eq!(BibField::from_label("Share this article"), None);
    }

    #[test]
    fn test_default_layouts_are_valid() {
        for layout in SelectorLayout::defaults() {
            assert!(layout.validate().is_ok(), "{} should be valid", layout.name);
        }
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut layout = SelectorLayout::current();
        layout.value.selector = "time[".to_string();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_unknown_labels_ignored_and_missing_values_empty() {
        let doc = HtmlDocument::parse(
            r#"<h1 class="c-article-title">T</h1>
            <div class="c-bibliographic-information"><div><ul>
              <li class="c-bibliographic-information__list-item"><h4>Cite this article</h4>
                <p class="c-bibliographic-information__value"><time>01 May 2019</time></p></li>
              <li class="c-bibliographic-information__list-item"><h4>Received</h4></li>
              <li class="c-bibliographic-information__list-item"><p>no heading</p></li>
              <li class="c-bibliographic-information__list-item"><h4>Accepted</h4>
                <p class="c-bibliographic-information__value"><time>15 June 2019</time></p></li>
            </ul></div></div>"#,
        );

        let fields = Layout::<HtmlDocument>::extract(&SelectorLayout::current(), &doc);
        assert_eq!(fields.title, "T");
        assert_eq!(fields.time.received, "");
        assert_eq!(fields.time.accepted, "15 June 2019");
        assert_eq!(fields.doi, "");
    }

    #[test]
    fn test_standalone_doi_requires_heading_text() {
        let doc = HtmlDocument::parse(
            r#"<h1 itemprop="name headline">T</h1>
            <div id="article-info-content">
              <h3 class="strong mb4"><abbr>PMID</abbr></h3>
              <p class="standard-space-below text14"><a href="https://doi.org/10.1038/x">x</a></p>
            </div>"#,
        );

        let fields = Layout::<HtmlDocument>::extract(&SelectorLayout::legacy(), &doc);
        assert_eq!(fields.doi, "");
    }

    #[test]
    fn test_layout_toml_round_trip() {
        let layout = SelectorLayout::legacy();
        let toml_str = toml::to_string_pretty(&layout).unwrap();
        let parsed: SelectorLayout = toml::from_str(&toml_str).unwrap();
        assert_eq!(layout, parsed);
    }
}
