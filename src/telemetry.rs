use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
/// Safe to call more than once.
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already initialised");
    }
}
