//! HTML document capability backed by `scraper`

use pubtrail_domain::{DocumentQuery, ElementHandle};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A parsed HTML page
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

/// Borrowed element of an [`HtmlDocument`]
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl DocumentQuery for HtmlDocument {
    type Element<'a> = HtmlElement<'a>;

    fn query_selector(&self, selector: &str) -> Option<HtmlElement<'_>> {
        let selector = parse_selector(selector)?;
        self.html.select(&selector).next().map(HtmlElement)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<HtmlElement<'_>> {
        match parse_selector(selector) {
            Some(selector) => self.html.select(&selector).map(HtmlElement).collect(),
            None => Vec::new(),
        }
    }
}

impl ElementHandle for HtmlElement<'_> {
    fn query_selector(&self, selector: &str) -> Option<Self> {
        let selector = parse_selector(selector)?;
        self.0.select(&selector).next().map(HtmlElement)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Self> {
        match parse_selector(selector) {
            Some(selector) => self.0.select(&selector).map(HtmlElement).collect(),
            None => Vec::new(),
        }
    }

    fn text(&self) -> String {
        normalize_ws(&self.0.text().collect::<String>())
    }

    fn html(&self) -> String {
        self.0.inner_html()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }
}

/// Whether `selector` is valid CSS for the HTML backend
pub fn is_valid_selector(selector: &str) -> bool {
    Selector::parse(selector).is_ok()
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Collapse runs of whitespace to one space and trim
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve an `href` against the page it was found on
///
/// Absolute links come back unchanged; relative ones are joined onto `base`.
/// If `base` is not a URL the trimmed `href` is returned as-is.
pub fn resolve_href(base: &str, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}
