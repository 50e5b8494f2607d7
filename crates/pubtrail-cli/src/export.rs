//! Flat-file persistence of links, records, failures and feature tables.

use crate::error::{CliError, Result};
use pubtrail_domain::{ArticleLink, ArticleRecord};
use pubtrail_features::{write_table, FeatureConfig, FeatureRow};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory written by `discover`
pub const DISCOVER_DIR: &str = "output_crawl_articles";

/// Directory written by `harvest`
pub const HARVEST_DIR: &str = "output_crawl_article_info";

/// Directory written by `features`
pub const FEATURES_DIR: &str = "output_create_csv";

/// File locations below an output root.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    /// Create paths below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Discovered links, one per line.
    pub fn links(&self) -> PathBuf {
        self.root.join(DISCOVER_DIR).join("data.txt")
    }

    /// Harvested records as JSON.
    pub fn records(&self) -> PathBuf {
        self.root.join(HARVEST_DIR).join("data.json")
    }

    /// Links that could not be harvested, one per line.
    pub fn failures(&self) -> PathBuf {
        self.root.join(HARVEST_DIR).join("errors.txt")
    }

    /// Feature table.
    pub fn table(&self) -> PathBuf {
        self.root.join(FEATURES_DIR).join("data.csv")
    }
}

/// Read a newline-delimited link file.
///
/// Carriage returns and surrounding whitespace are stripped; blank lines are
/// skipped.
pub fn read_links(path: &Path) -> Result<Vec<ArticleLink>> {
    let contents = read_input(path)?;
    let links: Vec<ArticleLink> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ArticleLink::from)
        .collect();

    debug!("Read {} links from {}", links.len(), path.display());
    Ok(links)
}

/// Write links, one per line.
pub fn write_links(path: &Path, links: &[ArticleLink]) -> Result<()> {
    write_lines(path, links.iter().map(ArticleLink::as_str))
}

/// Write the links that failed, one per line.
pub fn write_failures(path: &Path, failures: &[ArticleLink]) -> Result<()> {
    write_links(path, failures)
}

/// Write records as a JSON array.
pub fn write_records_json(path: &Path, records: &[ArticleRecord]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read records written by [`write_records_json`].
pub fn read_records_json(path: &Path) -> Result<Vec<ArticleRecord>> {
    let contents = read_input(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write the feature table.
pub fn write_feature_table(path: &Path, rows: &[FeatureRow], config: &FeatureConfig) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_table(&mut writer, rows, config)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Create the directory that will hold `path`.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_lines<'a>(path: &Path, lines: impl Iterator<Item = &'a str>) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubtrail_domain::LifecycleTimestamps;

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::new("data");
        assert_eq!(paths.links(), Path::new("data/output_crawl_articles/data.txt"));
        assert_eq!(paths.records(), Path::new("data/output_crawl_article_info/data.json"));
        assert_eq!(paths.failures(), Path::new("data/output_crawl_article_info/errors.txt"));
        assert_eq!(paths.table(), Path::new("data/output_create_csv/data.csv"));
    }

    #[test]
    fn test_read_links_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");
        fs::write(&path, "https://n.com/a\r\n\r\n  https://n.com/b  \n\n").unwrap();

        let links = read_links(&path).unwrap();
        assert_eq!(links, vec![ArticleLink::new("https://n.com/a"), ArticleLink::new("https://n.com/b")]);
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let err = read_links(Path::new("/nonexistent/links.txt")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/links.txt"));
    }

    #[test]
    fn test_records_json_round_trip_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = OutputPaths::new(dir.path()).records();

        let record = ArticleRecord::new(
            "Title",
            ArticleLink::new("https://n.com/a"),
            "https://doi.org/10.1/a",
            LifecycleTimestamps {
                published: "20 February 2020".to_string(),
                ..LifecycleTimestamps::default()
            },
        );
        write_records_json(&path, std::slice::from_ref(&record)).unwrap();

        assert_eq!(read_records_json(&path).unwrap(), vec![record]);
    }

    #[test]
    fn test_failures_file_is_newline_delimited() {
        let dir = tempfile::tempdir().unwrap();
        let path = OutputPaths::new(dir.path()).failures();

        write_failures(&path, &[ArticleLink::new("https://n.com/x"), ArticleLink::new("https://n.com/y")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "https://n.com/x\nhttps://n.com/y\n");

        write_failures(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
