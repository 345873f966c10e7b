//! Hello/Echo - two minimal AWS Lambda handlers sharing one library crate.
//!
//! This crate implements two independent, stateless functions:
//! 1. A Hello Lambda that answers every invocation with a fixed HTML greeting
//! 2. An Echo Lambda that reflects the invocation event and context back as JSON
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution, driven by `lambda_runtime`
//! - `serde_json` values for opaque event and context payloads
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let response = hello_echo::echo::respond(&json!({"a": 1}), &json!({"requestId": "abc"}));
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, r#"{"event":{"a":1},"context":{"requestId":"abc"}}"#);
//! ```

// Module declarations
pub mod core;
pub mod echo;
pub mod errors;
pub mod hello;
pub mod response;

pub use errors::ConfigError;
pub use response::Response;

use crate::core::config::{AppConfig, LogFormat};

/// Configure structured logging for AWS Lambda environments.
///
/// With [`LogFormat::Json`] this installs a JSON formatter suitable for
/// `CloudWatch` Logs integration; [`LogFormat::Text`] uses a compact plain
/// formatter. It should be called at the start of each Lambda binary.
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// let config = hello_echo::core::config::AppConfig::default();
/// hello_echo::setup_logging(&config);
/// ```
pub fn setup_logging(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match config.log_format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Text => {
            // Lambda stamps each line itself
            let fmt_layer = tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
