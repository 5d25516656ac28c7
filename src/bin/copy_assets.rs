// SPDX-License-Identifier: MPL-2.0
//! Copies rendered plots into the presentation's static assets tree.

use crab_presentation::app::{config, paths};
use crab_presentation::app::config::PLOT_EXTENSION;
use crab_presentation::logging;
use crab_presentation::tools::copy_assets::copy_plots;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
copy-assets

Copies every .png plot from the analysis output into the presentation assets.

USAGE:
  copy-assets [OPTIONS]

OPTIONS:
  --source <dir>        Directory holding rendered plots [default: ../output/plots]
  --destination <dir>   Directory the plots are copied into [default: ./public/output/plots]
  --config-dir <dir>    Directory containing settings.toml
  -h, --help            Print this help
";

struct Flags {
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    config_dir: Option<String>,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Flags {
        source: args.opt_value_from_str("--source")?,
        destination: args.opt_value_from_str("--destination")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    }))
}

fn main() -> ExitCode {
    logging::init(logging::DEFAULT_LEVEL);

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::error!("Invalid arguments: {err}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir);
    let (config, warning) = config::load();
    if warning.is_some() {
        tracing::warn!("Using default asset directories");
    }

    let source = flags.source.unwrap_or_else(|| config.assets.source_dir());
    let destination = flags
        .destination
        .unwrap_or_else(|| config.assets.target_dir());

    match copy_plots(&source, &destination, PLOT_EXTENSION) {
        Ok(report) => {
            tracing::debug!("{} files copied", report.copied.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Error copying files: {err}");
            ExitCode::FAILURE
        }
    }
}
