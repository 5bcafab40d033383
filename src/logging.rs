// src/logging.rs
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber once; later calls are no-ops.
pub fn init() {
    static INITIALISED: OnceLock<()> = OnceLock::new();

    INITIALISED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let subscriber = fmt::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
