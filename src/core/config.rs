use std::env;

use tracing::level_filters::LevelFilter;

use crate::errors::ConfigError;

/// Output format for the tracing subscriber, mirroring the values Lambda's
/// logging controls put in `AWS_LAMBDA_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Maps a Lambda log level (`TRACE` .. `FATAL`) onto a tracing level.
///
/// `FATAL` has no tracing counterpart and becomes `error`; anything
/// unrecognised falls back to `info`.
fn lambda_log_level(level: &str) -> LevelFilter {
    let level = level.trim();
    if level.eq_ignore_ascii_case("fatal") {
        return LevelFilter::ERROR;
    }
    level.parse().unwrap_or(LevelFilter::INFO)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::InvalidVar {
                name: name.to_string(),
                message: e.to_string(),
            }),
        })
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Blank values count as unset. `AWS_LAMBDA_LOG_LEVEL` wins over `RUST_LOG`;
    /// only `RUST_LOG` may carry full filter directives.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let var = |name: &str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(name)?.filter(|v| !v.trim().is_empty()))
        };

        let log_format = match var("AWS_LAMBDA_LOG_FORMAT")? {
            Some(value) => value.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        let log_level = match var("AWS_LAMBDA_LOG_LEVEL")? {
            Some(level) => lambda_log_level(&level).to_string().to_ascii_lowercase(),
            None => var("RUST_LOG")?.unwrap_or_else(|| "info".to_string()),
        };

        Ok(Self {
            log_format,
            log_level,
        })
    }
}
