//! Integration tests for cfndump against a live AWS account.
//!
//! These tests issue real AWS API calls using whatever credentials the
//! environment provides. They are marked `#[ignore]` so they don't run
//! during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p cfndump-integration -- --ignored
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Load the shared AWS configuration from the environment.
pub async fn shared_config() -> aws_config::SdkConfig {
    init_tracing();
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await
}

mod test_dump;
