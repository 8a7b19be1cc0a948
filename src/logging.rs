//! Logging setup

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// How much diagnostic output descver emits
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Emit nothing. Standard error stays empty for every command outcome.
    #[default]
    Default,
    /// Show debug messages from descver on standard error.
    Verbose,
}

/// Configure `tracing` based on the given [`Level`], taking into account the
/// `RUST_LOG` environment variable.
///
/// At [`Level::Default`] events are still filtered by `RUST_LOG` but written
/// to a sink, so tooling that checks for an empty standard error is never
/// disturbed. At [`Level::Verbose`] `descver=debug` is the default filter and
/// events go to standard error.
pub fn setup_logging(level: Level) {
    match level {
        Level::Default => {
            let filter = EnvFilter::builder()
                .with_default_directive(LevelFilter::OFF.into())
                .from_env_lossy();

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .without_time()
                        .with_target(false)
                        .with_writer(std::io::sink),
                )
                .try_init();
        }
        Level::Verbose => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("descver=debug"));

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init();
        }
    }
}
