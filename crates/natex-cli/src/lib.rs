pub mod cli;
pub mod discover;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing to stderr.
///
/// Only active when `NATEX_LOG` is set, e.g. `NATEX_LOG=natex=trace` to see
/// every dispatch decision of the matcher chain.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if let Ok(filter) = EnvFilter::try_from_env("NATEX_LOG") {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
