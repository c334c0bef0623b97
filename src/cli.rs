//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use tinct::build_info;
use tinct::theme::SourceFormat;

/// Apply a base16 color scheme to the desktop environment.
#[derive(Debug, Parser)]
#[command(name = "tinct", version, long_version = &*build_info::cli_version_text().leak())]
pub struct Args {
    /// Theme directory or colors file. Use `-` (or omit) together with
    /// -j/-y to read a piped color document.
    pub theme: Option<String>,

    /// Apply only the named modules, in order. Repeatable.
    #[arg(short = 'm', long = "module", value_name = "MODULE")]
    pub modules: Vec<String>,

    /// Suppress the final summary line.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Parse the color document as JSON.
    #[arg(short = 'j', long = "json", conflicts_with = "yaml")]
    pub json: bool,

    /// Parse the color document as YAML.
    #[arg(short = 'y', long = "yaml")]
    pub yaml: bool,
}

impl Args {
    /// Document format explicitly requested via -j/-y.
    pub fn forced_format(&self) -> Option<SourceFormat> {
        if self.json {
            Some(SourceFormat::Json)
        } else if self.yaml {
            Some(SourceFormat::Yaml)
        } else {
            None
        }
    }
}
