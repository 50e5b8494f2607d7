//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pubtrail - harvest journal article metadata and derive publication timelines.
#[derive(Debug, Parser)]
#[command(name = "pubtrail")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PUBTRAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root directory for output files
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect article links from a paged listing
    Discover(DiscoverArgs),

    /// Extract article metadata from a file of links
    Harvest(HarvestArgs),

    /// Derive the feature table from harvested records
    Features(FeaturesArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the discover command.
#[derive(Debug, Parser)]
pub struct DiscoverArgs {
    /// First listing page (e.g., https://www.nature.com/nature/articles?type=article)
    pub start_url: String,

    /// Number of listing pages to walk
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

/// Arguments for the harvest command.
#[derive(Debug, Parser)]
pub struct HarvestArgs {
    /// File with one article link per line
    pub links_file: PathBuf,
}

/// Arguments for the features command.
#[derive(Debug, Parser)]
pub struct FeaturesArgs {
    /// JSON file written by `harvest`
    pub records_file: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_command() {
        let cli = Cli::parse_from([
            "pubtrail",
            "discover",
            "https://www.nature.com/nature/articles?type=article",
            "367",
        ]);
        match cli.command {
            Command::Discover(args) => assert_eq!(args.pages, 367),
            _ => panic!("Expected Discover command"),
        }
    }

    #[test]
    fn test_zero_pages_rejected() {
        let result = Cli::try_parse_from(["pubtrail", "discover", "https://example.org", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["pubtrail", "discover", "https://example.org"]).is_err());
        assert!(Cli::try_parse_from(["pubtrail", "harvest"]).is_err());
        assert!(Cli::try_parse_from(["pubtrail"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "pubtrail",
            "harvest",
            "links.txt",
            "--output-dir",
            "/tmp/out",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(matches!(cli.command, Command::Harvest(_)));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["pubtrail", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected config init"),
        }
    }
}
