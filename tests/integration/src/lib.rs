//! End-to-end tests across the SDK crates.
//!
//! These tests build queries through the public facade, attach them to find
//! requests, and assert on the exact text the transport layer would send.
//! They need no running server.
//!
//! ```text
//! cargo test -p appacitive-integration
//! ```

use std::sync::Once;

use appacitive_core::SdkConfig;
use tracing_subscriber::EnvFilter;

mod test_find;
mod test_render;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(&SdkConfig::from_env()))
            .with_test_writer()
            .init();
    });
}

/// Log filter built from the configured level, `warn` if it does not parse.
fn log_filter(config: &SdkConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Configuration pointing at a local endpoint.
#[must_use]
pub fn test_config() -> SdkConfig {
    init_tracing();

    SdkConfig::builder()
        .base_url("http://localhost:9090/v1.0".into())
        .build()
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_should_seed_log_filter_from_config() {
        let config = SdkConfig::builder().log_level("debug".into()).build();
        assert_eq!(log_filter(&config).max_level_hint(), Some(LevelFilter::DEBUG));

        let config = SdkConfig::default();
        assert_eq!(log_filter(&config).max_level_hint(), Some(LevelFilter::INFO));
    }
}
