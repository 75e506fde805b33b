use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logger system
///
/// Function runtimes collect stdout/stderr, so logs go to the console only.
/// Safe to call more than once.
pub fn init_logger() {
    // Capture log macro logs (reqwest, hyper)
    let _ = tracing_log::LogTracer::init();

    let console_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    // Default to INFO and above, RUST_LOG overrides
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        info!("Logger system initialized");
    }
}
