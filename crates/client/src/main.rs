//! Know Your Enemy patcher binary.
//!
//! Reads its configuration from the environment (and `.env`), runs one patch,
//! and exits non-zero if the run fails.
//!
//! # Examples
//!
//! ```bash
//! KYE_LOAD_ORDER=load_order.json cargo run -p kye-client
//!
//! # Custom rules, debug logs mirrored to a file
//! KYE_LOAD_ORDER=load_order.json KYE_DATA_DIR=./my-rules KYE_LOG_DIR=./logs \
//!     RUST_LOG=debug cargo run -p kye-client
//! ```
mod logging;

use std::process::ExitCode;

use kye_core::{ErrorSeverity, PatchFailure};
use kye_runtime::{Patcher, PatcherConfig, RuntimeError};

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = PatcherConfig::from_env();
    let log_dir = config.as_ref().ok().and_then(|c| c.log_dir.as_deref());
    let _guard = match logging::setup_logging(log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match config.and_then(|config| Patcher::builder(config).build().run()) {
        Ok(output) => {
            tracing::info!(
                "Patched {} records into {} ({} masters)",
                output.records.len(),
                output.plugin,
                output.masters.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn report(error: &RuntimeError) -> ExitCode {
    let severity = error.severity();
    tracing::error!(
        code = error.error_code(),
        severity = severity.as_str(),
        "{}",
        error
    );
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        tracing::error!("  caused by: {}", cause);
        source = cause.source();
    }

    match severity {
        ErrorSeverity::Validation => ExitCode::from(2),
        ErrorSeverity::Fatal => ExitCode::FAILURE,
    }
}
