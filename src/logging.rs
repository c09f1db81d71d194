use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize structured JSON logging.
///
/// Defaults to `warn` level unless overridden by `AUTOCUT_LOG`. Plan output
/// goes to stdout, so logs are written to stderr to keep the two streams
/// separable.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_env_var("AUTOCUT_LOG")
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .with_span_list(true),
        )
        .try_init();
}
