//! Structured logging setup.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither an explicit directive nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "server_config=info";

/// Install a stderr `fmt` subscriber.
///
/// `directive` wins over `RUST_LOG`, which wins over [`DEFAULT_FILTER`].
/// Must be called at most once per process.
pub fn init_logging(directive: Option<&str>) -> Result<(), ParseError> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}
