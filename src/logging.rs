//! @acp:module "Logging"
//! @acp:summary "tracing subscriber setup for the CLI"
//! @acp:domain cli
//! @acp:layer infrastructure

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "droid=debug"
    } else {
        "droid=warn"
    }
}

/// Install the global subscriber.
///
/// Diagnostics go to stderr so styled command output on stdout stays
/// readable. `RUST_LOG` takes precedence over `verbose`.
pub fn setup_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "Logging initialized");
    }
}
