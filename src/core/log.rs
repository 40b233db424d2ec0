//! Logging setup. Output goes to stderr so stdout only carries report output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "fxmean";

/// Level for the application's own events. Failures stay visible without `--verbose`.
pub fn app_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Restricts output to the application target; dependency events are dropped.
pub fn app_targets(verbose: bool) -> Targets {
    Targets::new().with_target(APP_TARGET, app_level(verbose))
}

/// `RUST_LOG` when set, otherwise the same level as [`app_targets`].
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{APP_TARGET}={}", app_level(verbose))))
}

pub fn init_logging(verbose: bool) {
    let layer = fmt::layer().with_writer(std::io::stderr).without_time();
    let layer = if verbose {
        layer.pretty().boxed()
    } else {
        layer.compact().with_target(false).boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(app_targets(verbose))
        .with(env_filter(verbose))
        .init();
}
