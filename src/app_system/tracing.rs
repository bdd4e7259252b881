/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` (usually from
/// [`StoreConfig`](crate::config::StoreConfig)) applies.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=storefront::order_actor=debug,info cargo run
/// ```
pub fn setup_tracing(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
