use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported log format {0:?}: expected JSON or Text")]
    InvalidLogFormat(String),

    #[error("{name}: {message}")]
    InvalidVar { name: String, message: String },
}
