//! CLI entry point for tinct.

mod cli;

use clap::Parser;
use tinct::build_info;
use tinct::config::load_config;
use tinct::effects::{dispatch, DispatchSummary, EffectRegistry};
use tinct::error::{ConfigError, ThemeError, TinctError};
use tinct::layout::Layout;
use tinct::template::TemplateStore;
use tinct::theme::{self, Theme};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_tracing(args.verbose);
    debug!("tinct {}", build_info::startup_metadata_line());

    match try_run(&args) {
        Ok((theme, summary)) => {
            if !args.quiet {
                println!(
                    "applied {} ({}/{} modules)",
                    theme.scheme.name,
                    summary.applied.len(),
                    summary.applied.len() + summary.skipped.len()
                );
            }
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn try_run(args: &cli::Args) -> Result<(Theme, DispatchSummary), TinctError> {
    let layout = Layout::discover().ok_or_else(|| {
        TinctError::Config(ConfigError::Invalid(
            "could not determine the home directory".into(),
        ))
    })?;
    let config = load_config(&layout)?;
    let theme = load_theme(args)?;

    let modules = if args.modules.is_empty() {
        config.modules.clone()
    } else {
        args.modules.clone()
    };

    let templates = TemplateStore::new(&layout);
    let registry = EffectRegistry::builtin();
    let summary = dispatch(&registry, &modules, &theme, &layout, &templates, &config);
    Ok((theme, summary))
}

fn load_theme(args: &cli::Args) -> Result<Theme, ThemeError> {
    let forced = args.forced_format();
    match args.theme.as_deref() {
        Some("-") | None => match forced {
            Some(format) => theme::load_stdin(std::io::stdin().lock(), format),
            None => Err(ThemeError::MissingSource),
        },
        Some(path) => theme::load(path, forced),
    }
}

/// Map `-v` occurrences onto a log filter, honoring `RUST_LOG` when set.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tinct={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
