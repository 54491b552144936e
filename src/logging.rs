use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Registry + env-filter + fmt layer on stderr. `RUST_LOG` overrides the
/// default directive.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "shelfsearch=debug"
    } else {
        "shelfsearch=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
