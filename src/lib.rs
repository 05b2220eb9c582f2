pub mod cli;
pub mod context;
pub mod fp;
pub mod oop;
pub mod utils;
pub mod wasm;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber. Safe to call more than once.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
