//! `tracing` subscriber setup.
//!
//! The subscriber writes plain lines without timestamps (there is no system
//! clock on `wasm32-unknown-unknown`) to whatever writer the caller supplies:
//! stderr natively, the browser console from the landing page.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Fallback filter when the configured directive does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init<W>(filter: &str, writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .without_time()
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        init("not a [valid filter", std::io::sink);
        assert!(!init("debug", std::io::sink));
        tracing::info!("logged into the sink");
    }
}
