//! Logger setup shared by the binaries and tests.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards one-time logger installation
static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade.
///
/// The crate logs at `info` by default; `RUST_LOG` overrides it. Safe to call more than
/// once, and never panics if another logger is already installed.
pub fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("chaintable", LevelFilter::Info)
            .filter_module("chaintable_demo", LevelFilter::Info)
            .filter_module("chain_report", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        if let Err(err) = builder.try_init() {
            log::debug!("logger already installed: {err}");
        }
    });
}
