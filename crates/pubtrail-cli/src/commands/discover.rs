//! Discover command implementation.

use crate::cli::DiscoverArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::export::{write_links, OutputPaths};
use crate::output::Formatter;
use pubtrail_domain::{ArticleLink, PageLoader};
use pubtrail_extractor::{discover_links, DiscoveryReport, HttpLoader};

/// Execute the discover command.
pub async fn execute_discover(
    args: DiscoverArgs,
    config: &Config,
    paths: &OutputPaths,
    formatter: &Formatter,
) -> Result<()> {
    let loader = HttpLoader::new(&config.extractor)?;
    let report = discover(&loader, &args.start_url, args.pages, config, paths).await?;

    println!(
        "{}",
        formatter.discovery_report(&report.links, report.pages_visited, &report.failed_pages)
    );
    println!("{}", formatter.saved("Links", &paths.links()));
    Ok(())
}

/// Walk the listing from `start_url` and persist the links found.
pub async fn discover<L: PageLoader>(
    loader: &L,
    start_url: &str,
    pages: u32,
    config: &Config,
    paths: &OutputPaths,
) -> Result<DiscoveryReport> {
    let start_url = start_url.trim();
    if !start_url.starts_with("http://") && !start_url.starts_with("https://") {
        return Err(CliError::InvalidInput(format!(
            "Start page must be an http(s) URL, got '{}'",
            start_url
        )));
    }

    let report = discover_links(
        loader,
        &config.extractor.discovery,
        ArticleLink::new(start_url),
        pages as usize,
    )
    .await;

    write_links(&paths.links(), &report.links)?;
    Ok(report)
}
