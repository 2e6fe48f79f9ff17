use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs the tracing subscriber described by the logging block.
///
/// With `enable_structured` off nothing is installed and the simulator
/// stays silent apart from its printed summary.
pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    if !logging.enable_structured {
        return Ok(());
    }

    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(())
}
