//! Command-line interface of the `helix` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::run;

#[derive(Parser, Debug)]
#[command(name = "helix")]
#[command(about = "Pre-render and inspect the DoubleHelix landing page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page into a static HTML document
    Build {
        /// Config file (defaults to ./helix.toml when present)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// List sections in mount order with their containers
    Sections {
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Validate a config by rendering every section
    Check {
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_with_paths() {
        let cli = Cli::parse_from(["helix", "build", "--config", "site.toml", "-o", "dist/index.html"]);
        match cli.command {
            Command::Build { config, out } => {
                assert_eq!(config, Some(PathBuf::from("site.toml")));
                assert_eq!(out, Some(PathBuf::from("dist/index.html")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::parse_from(["helix", "sections", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Sections { config: None }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["helix"]).is_err());
    }
}
