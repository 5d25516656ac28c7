// SPDX-License-Identifier: MPL-2.0
use crab_presentation::app::config::PresentationStyle;
use crab_presentation::app::{self, paths, Flags};
use crab_presentation::logging;

const HELP: &str = "\
crab_presentation

Desktop presentation of the Crab Age Prediction project.

USAGE:
  crab_presentation [OPTIONS]

OPTIONS:
  --lang <id>           Interface language, e.g. en-US or fr
  --route <path>        Page opened at startup: /, /analysis, /visualizations, /models
  --assets-dir <dir>    Directory containing assets/ and output/ [default: ./public]
  --style <style>       styled or plain [default: styled]
  --config-dir <dir>    Directory containing settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let style: Option<PresentationStyle> = args.opt_value_from_str("--style")?;
    Ok(Some(Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        style,
        config_dir: args.opt_value_from_str("--config-dir")?,
    }))
}

fn main() -> iced::Result {
    logging::init(logging::DEFAULT_LEVEL);

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
