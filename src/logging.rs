//! Tracing setup for the CLI.
//!
//! The subscriber is only installed when `JSON_TO_TS_LOG` (or `RUST_LOG`) is
//! set, e.g. `JSON_TO_TS_LOG=json_to_ts::registry=debug json-to-ts ts -i a.json`.
//! Output goes to stderr so stdout stays clean for the generated code.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JSON_TO_TS_LOG";

pub fn init_tracing() {
    let filter = match std::env::var(LOG_ENV) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
