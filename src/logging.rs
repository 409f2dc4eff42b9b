//! Tracing subscriber setup for binaries and test harnesses embedding this
//! crate. Library code only emits events; it never installs a subscriber.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global compact-format subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `debug` when
/// `verbose` and `info` otherwise. Call at most once per process.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("portfolio_core=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio_core=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
