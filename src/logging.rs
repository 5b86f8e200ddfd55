//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fpl_analyzer=debug"
    } else {
        "fpl_analyzer=info"
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter.
///
/// Returns `false` when a global subscriber was already set, in which case
/// the existing one is kept.
pub fn init(verbose: bool, json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    // A global subscriber is already set; keep it.
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
        return false;
    }
    true
}
