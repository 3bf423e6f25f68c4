use tracing_subscriber::{fmt, EnvFilter};

use crate::{errors::Error, Result};

/// Initialize logging/tracing for a service writing to stdout.
///
/// Default: info for our crates, warn for everything else.
/// Can be overridden with `RUST_LOG`.
pub fn init(service_name: &str) -> Result<()> {
    fmt()
        .with_env_filter(default_filter(service_name))
        .with_target(false)
        .with_ansi(true)
        .try_init()
        .map_err(|e| Error::External(format!("failed to init logging: {e}")))
}

/// Same as [`init`] but logs go to stderr, leaving stdout for program output.
pub fn init_stderr(service_name: &str) -> Result<()> {
    fmt()
        .with_env_filter(default_filter(service_name))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::External(format!("failed to init logging: {e}")))
}

fn default_filter(service_name: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,echobot_core=info,echobot_telegram=info,{}=info",
            service_name.replace('-', "_")
        ))
    })
}
