//! Logging setup.
//!
//! Logs go to stderr so generated modules can be piped from stdout.
//! `VALMOD_LOG` takes an `EnvFilter` directive and overrides `-v`.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "VALMOD_LOG";

const CRATES: [&str; 2] = ["valmod", "valmod_compiler"];

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(verbosity > 1),
        )
        .with(filter)
        .try_init();
}

/// Filter used when `VALMOD_LOG` is unset.
fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let mut directive = String::from("warn");
    for krate in CRATES {
        directive.push_str(&format!(",{}={}", krate, level));
    }
    directive
}
