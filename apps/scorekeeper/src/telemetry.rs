use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::runtime::LogFormat;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `default_filter` when set. Logs go to stderr so that
/// rendered output on stdout stays machine-readable.
pub fn init_tracing(default_filter: &str, format: LogFormat) {
    build_subscriber(default_filter, format, std::io::stderr).init();
}

/// The subscriber [`init_tracing`] installs, writing to `writer`.
pub fn build_subscriber<W>(
    default_filter: &str,
    format: LogFormat,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let base = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => Box::new(registry.with(base.with_ansi(false).json())),
        LogFormat::Text => Box::new(registry.with(base)),
    }
}
