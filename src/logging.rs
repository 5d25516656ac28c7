// SPDX-License-Identifier: MPL-2.0
//! Logging setup shared by the presentation app and the utilities.
//!
//! All binaries log through `tracing` to stderr. `RUST_LOG` takes precedence
//! over the level each binary passes in. Colors are only emitted when stderr
//! is a terminal, so piped or redirected logs stay plain text.

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(wants_ansi(&io::stderr()))
        .with_target(false)
        .try_init();
}

fn wants_ansi(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init("debug");
        init(DEFAULT_LEVEL);
    }

    #[test]
    fn files_get_no_color_codes() {
        let file = tempfile::tempfile().expect("temp file");
        assert!(!wants_ansi(&file));
    }
}
