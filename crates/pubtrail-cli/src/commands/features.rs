//! Features command implementation.

use crate::cli::FeaturesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::export::{read_records_json, write_feature_table, OutputPaths};
use crate::output::Formatter;
use pubtrail_features::{FeatureCalculator, FeatureRow};
use std::path::Path;

/// Execute the features command.
pub fn execute_features(
    args: FeaturesArgs,
    config: &Config,
    paths: &OutputPaths,
    formatter: &Formatter,
) -> Result<()> {
    let rows = derive_features(&args.records_file, config, paths)?;

    println!("{}", formatter.feature_summary(&rows));
    println!("{}", formatter.saved("Feature table", &paths.table()));
    Ok(())
}

/// Compute feature rows for the saved records and write the table.
pub fn derive_features(records_file: &Path, config: &Config, paths: &OutputPaths) -> Result<Vec<FeatureRow>> {
    let records = read_records_json(records_file)?;
    let rows = FeatureCalculator::new().compute_all(&records);
    write_feature_table(&paths.table(), &rows, &config.features)?;
    Ok(rows)
}
