//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio content collection CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Print query results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load all content, report refused records and dangling references
    Check,

    /// List published articles
    List {
        /// Only articles carrying this tag slug
        #[arg(short, long)]
        tag: Option<String>,

        /// Only articles in this category slug
        #[arg(long)]
        category: Option<String>,

        /// Only featured articles
        #[arg(short, long)]
        featured: bool,

        /// Newest N articles; bare flag uses `[query] latest_limit`
        #[arg(short, long, num_args = 0..=1, allow_negative_numbers = true)]
        latest: Option<Option<i64>>,
    },

    /// Show a single article by slug
    Show {
        slug: String,
    },

    /// Articles related to the given article slug
    Related {
        slug: String,

        /// Maximum number of results (negative counts as zero)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Case-insensitive search over title, excerpt and body
    Search {
        query: String,
    },

    /// Site-wide statistics
    Stats,

    /// Published articles grouped by year
    Archive,

    /// Tags with their article counts
    Tags,

    /// Categories with their article counts
    Categories,

    /// List projects
    Projects {
        /// Only featured projects
        #[arg(short, long)]
        featured: bool,

        /// Only projects with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Only projects using this technology
        #[arg(short, long)]
        tech: Option<String>,
    },

    /// Resume timeline and skills
    Resume,

    /// Write all collections as JSON files
    Export {
        /// Output directory (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

/// Clamp a user-supplied count to a usable limit; negative values become zero.
pub fn clamp_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-5), 0);
        assert_eq!(clamp_count(0), 0);
        assert_eq!(clamp_count(3), 3);
    }

    #[test]
    fn test_parse_list_with_negative_latest() {
        let cli = Cli::try_parse_from(["folio", "list", "--latest", "-2"]).unwrap();
        match cli.command {
            Commands::List { latest, .. } => assert_eq!(latest, Some(Some(-2))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_bare_latest() {
        let cli = Cli::try_parse_from(["folio", "list", "--latest"]).unwrap();
        match cli.command {
            Commands::List { latest, .. } => assert_eq!(latest, Some(None)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["folio", "-r", "site", "stats", "--json"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn test_parse_export_output() {
        let cli = Cli::try_parse_from(["folio", "export", "-o", "dist/data"]).unwrap();
        assert!(!cli.is_check());
        match cli.command {
            Commands::Export { output } => assert_eq!(output, Some(PathBuf::from("dist/data"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
