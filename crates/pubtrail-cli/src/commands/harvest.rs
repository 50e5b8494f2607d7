//! Harvest command implementation.

use crate::cli::HarvestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::export::{read_links, write_failures, write_records_json, OutputPaths};
use crate::output::Formatter;
use pubtrail_domain::PageLoader;
use pubtrail_extractor::{BatchReport, BatchRunner, HttpLoader, LayoutResolver};
use std::path::Path;
use tracing::info;

/// Execute the harvest command.
pub async fn execute_harvest(
    args: HarvestArgs,
    config: &Config,
    paths: &OutputPaths,
    formatter: &Formatter,
) -> Result<()> {
    let loader = HttpLoader::new(&config.extractor)?;
    let report = harvest(loader, &args.links_file, config, paths).await?;

    println!("{}", formatter.harvest_report(&report));
    println!("{}", formatter.saved("Records", &paths.records()));
    println!("{}", formatter.saved("Failures", &paths.failures()));
    Ok(())
}

/// Harvest every link in `links_file` with `loader` and persist the outcome.
///
/// Both output files are written even when one side is empty.
pub async fn harvest<L: PageLoader>(
    loader: L,
    links_file: &Path,
    config: &Config,
    paths: &OutputPaths,
) -> Result<BatchReport> {
    let links = read_links(links_file)?;
    let resolver = LayoutResolver::from_config(&config.extractor)?;

    let report = BatchRunner::new(loader, resolver).run(&links).await;

    info!("Writing output files...");
    write_records_json(&paths.records(), &report.successes)?;
    write_failures(&paths.failures(), &report.failures)?;
    Ok(report)
}
