//! Tracing subscriber setup for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

use auto_outfit_core::config::GeneralConfig;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false` if
/// a global subscriber was already installed, which is not an error.
pub fn init_tracing(config: &GeneralConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
