use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing. Call once at service startup.
///
/// JSON lines by default for log shipping; set `LOG_FORMAT=text` for local
/// runs. Filtering comes from `RUST_LOG`, defaulting to `info`.
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").as_deref() == Ok("text") {
        let _ = registry.with(fmt::layer()).try_init();
    } else {
        let _ = registry.with(fmt::layer().json()).try_init();
    }
}
