//! Link discovery over a paged article listing

use crate::config::DiscoveryConfig;
use crate::html::{resolve_href, HtmlDocument};
use pubtrail_domain::{ArticleLink, DocumentQuery, ElementHandle, PageLoader};
use tracing::{error, info};

/// Links found on one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Article links, absolute, in page order
    pub links: Vec<ArticleLink>,

    /// Next listing page, if the page has one
    pub next: Option<ArticleLink>,
}

/// Result of walking a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Every article link found, in discovery order
    pub links: Vec<ArticleLink>,

    /// Listing pages scanned successfully
    pub pages_visited: usize,

    /// Listing pages that could not be loaded
    pub failed_pages: Vec<ArticleLink>,
}

/// Scan one listing page's markup
///
/// Relative hrefs are resolved against `page_url`; anchors without an href
/// are skipped.
pub fn scan_listing(markup: &str, page_url: &str, config: &DiscoveryConfig) -> ListingPage {
    let doc = HtmlDocument::parse(markup);

    let links = doc
        .query_selector_all(&config.link_selector)
        .iter()
        .filter_map(|anchor| anchor.attribute("href"))
        .map(|href| resolve_href(page_url, &href))
        .filter(|href| !href.is_empty())
        .map(ArticleLink::new)
        .collect();

    let next = doc
        .query_selector(&config.next_selector)
        .and_then(|anchor| anchor.attribute("href"))
        .map(|href| resolve_href(page_url, &href))
        .filter(|href| !href.is_empty())
        .map(ArticleLink::new);

    ListingPage { links, next }
}

/// Walk up to `pages` listing pages starting at `start`
///
/// Each page is loaded once. The walk stops early when a page has no next
/// link or fails to load, since the next page cannot be known without it.
pub async fn discover_links<L: PageLoader>(
    loader: &L,
    config: &DiscoveryConfig,
    start: ArticleLink,
    pages: usize,
) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();
    let mut current = Some(start);

    for page in 1..=pages {
        let Some(url) = current.take() else {
            info!("No further listing pages after page {}", page - 1);
            break;
        };

        match loader.load(&url).await {
            Ok(markup) => {
                let listing = scan_listing(&markup, url.as_str(), config);
                info!("[SUCCESS]: page {} ({} links)", page, listing.links.len());
                report.links.extend(listing.links);
                report.pages_visited += 1;
                current = listing.next;
            }
            Err(e) => {
                error!("[ERROR]: page {} ({}): {}", page, url, e);
                report.failed_pages.push(url);
                break;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <ul>
          <li><h3 itemprop="name headline"><a href="/articles/a1">One</a></h3></li>
          <li><h3 itemprop="name headline"><a href="https://www.nature.com/articles/a2">Two</a></h3></li>
          <li><h3 itemprop="name headline"><a>No href</a></h3></li>
          <li><h3><a href="/articles/not-an-article">Other</a></h3></li>
        </ul>
        <ol><li class="inline-group-item" data-page="next"><a href="?page=2">Next</a></li></ol>
    "#;

    #[test]
    fn test_scan_listing() {
        let page = scan_listing(
            LISTING,
            "https://www.nature.com/nature/articles?type=article",
            &DiscoveryConfig::default(),
        );

        assert_eq!(
            page.links,
            vec![
                ArticleLink::new("https://www.nature.com/articles/a1"),
                ArticleLink::new("https://www.nature.com/articles/a2"),
            ]
        );
        assert_eq!(
            page.next,
            Some(ArticleLink::new("https://www.nature.com/nature/articles?page=2"))
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = scan_listing("<p>empty</p>", "https://example.org/", &DiscoveryConfig::default());
        assert!(page.links.is_empty());
        assert_eq!(page.next, None);
    }
}
