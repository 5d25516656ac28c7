// SPDX-License-Identifier: MPL-2.0
//! Polls the published presentation a fixed number of times and reports
//! what it sees.

use crab_presentation::app::{config, paths};
use crab_presentation::logging;
use crab_presentation::tools::deploy_check::{self, HttpProbe, PollSchedule};
use std::process::ExitCode;
use std::time::Duration;

const HELP: &str = "\
verify-deploy

Checks the published site every interval until the check budget is spent.

USAGE:
  verify-deploy [OPTIONS]

OPTIONS:
  --url <url>             Site to check [default: https://jonx0037.github.io/DS_6306_Project/]
  --interval-secs <n>     Seconds between checks [default: 30]
  --max-checks <n>        Number of checks [default: 10]
  --config-dir <dir>      Directory containing settings.toml
  -h, --help              Print this help
";

struct Flags {
    url: Option<String>,
    interval_secs: Option<u64>,
    max_checks: Option<u32>,
    config_dir: Option<String>,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Flags {
        url: args.opt_value_from_str("--url")?,
        interval_secs: args.opt_value_from_str("--interval-secs")?,
        max_checks: args.opt_value_from_str("--max-checks")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    }))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
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
    let (config, _warning) = config::load();
    let deploy = config.deploy;

    let url = flags.url.unwrap_or_else(|| deploy.url());
    let schedule = PollSchedule {
        interval: flags
            .interval_secs
            .map_or_else(|| deploy.interval(), Duration::from_secs),
        max_checks: flags.max_checks.unwrap_or_else(|| deploy.max_checks()),
    };

    if let Err(err) = deploy_check::validate(&schedule) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    let probe = match HttpProbe::new(url, deploy.timeout()) {
        Ok(probe) => probe,
        Err(err) => {
            tracing::error!("Could not build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Checking {} every {:?}", probe.url(), schedule.interval);
    deploy_check::poll(&probe, schedule).await;
    ExitCode::SUCCESS
}
