use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "shopkit_cart=debug,shopkit_store=info";

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG` when set. Returns `false` if a subscriber was already
/// installed, so calling this from several tests is harmless.
pub fn init() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
