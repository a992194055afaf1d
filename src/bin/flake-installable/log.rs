use tracing_subscriber::{FmtSubscriber, filter::EnvFilter};

const LOG_ENV: &str = "FLAKE_INSTALLABLE_LOG";

/// Configuration of logging.
///
/// Logs go to stderr and are only enabled when the filter environment
/// variable is set, so the resolved uri on stdout stays clean.
pub(crate) fn init() -> Result<(), std::io::Error> {
    let Ok(env_filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(());
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    Ok(())
}
