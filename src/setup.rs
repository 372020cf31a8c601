// src/setup.rs

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

pub(super) fn set_up_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
    tracing::debug!(filter = %config.log_filter, "tracing initialized");
}
