//! Library side of the `resolv` command.
//!
//! Commands write to any [`std::io::Write`] so they can be driven from tests
//! as well as from `main`.

pub mod commands;
mod config;

pub use config::{CliConfig, MAX_PASSES_ENV};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output on stderr.
///
/// Safe to call multiple times. The filter comes from `RUST_LOG` when it is
/// set; otherwise `verbose` enables `debug` for the resolv crates and
/// nothing is installed without it.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("resolv_registry=debug,resolv_interp=debug,resolvc=debug")
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
