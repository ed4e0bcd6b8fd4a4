//! Subscriber installation and logging configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Log level for the subscriber's default filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ObservabilityError::UnknownLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Logging section of the application config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Extra filter directives, e.g. `vitrine_catalog=debug`.
    pub directives: Vec<String>,
}

impl LoggingConfig {
    /// Build the filter: `RUST_LOG` if set, otherwise level plus directives.
    pub fn filter(&self) -> Result<EnvFilter, ObservabilityError> {
        if let Ok(from_env) = EnvFilter::try_from_default_env() {
            return Ok(from_env);
        }
        self.configured_filter()
    }

    /// Build the filter from configuration alone, ignoring the environment.
    pub fn configured_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        let mut filter = self.level.as_str().to_string();
        for directive in &self.directives {
            filter.push(',');
            filter.push_str(directive);
        }
        EnvFilter::try_new(&filter).map_err(|e| ObservabilityError::InvalidDirective(e.to_string()))
    }
}

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Level name not recognized.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// A filter directive could not be parsed.
    #[error("Invalid filter directive: {0}")]
    InvalidDirective(String),

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber described by `config`.
///
/// Output goes to stderr. Calling this a second time returns
/// [`ObservabilityError::AlreadyInitialized`].
pub fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = config.filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };

    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(" WARNING ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_config_defaults() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.directives.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let config: LoggingConfig = serde_json::from_str(
            r#"{"level": "debug", "format": "human", "directives": ["vitrine_cart=trace"]}"#,
        )
        .unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Human);
        assert!(config.configured_filter().is_ok());
    }

    #[test]
    fn test_invalid_directive() {
        let config = LoggingConfig {
            directives: vec!["vitrine_cart=notalevel".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.configured_filter(),
            Err(ObservabilityError::InvalidDirective(_))
        ));
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig {
            format: LogFormat::Human,
            ..Default::default()
        };
        // Another test binary may already own the global subscriber, so only
        // the second call's outcome is certain.
        let _ = init(&config);
        assert!(matches!(
            init(&config),
            Err(ObservabilityError::AlreadyInitialized(_))
        ));
    }
}
