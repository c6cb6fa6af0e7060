//! # Telemetry
//!
//! Leveled stderr logging shared by every stage of the pipeline.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;

/// Initializes stderr logging.
///
/// The default filter is `warn`, raised to `debug` by the CLI's debug
/// flag. `NOTEDROP_LOG` overrides both with a full `EnvFilter`
/// directive.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
