//! Error types for the numguess game core

use thiserror::Error;

use crate::game::RoundPhase;

/// Main error type for the game core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// A guess or hint was requested while no round is in play
    #[error("Cannot {operation} while the round is {phase}; start a new round first")]
    InvalidState {
        operation: String,
        phase: RoundPhase,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },
}

impl GuessError {
    pub(crate) fn invalid_state(operation: &str, phase: RoundPhase) -> Self {
        GuessError::InvalidState {
            operation: operation.to_string(),
            phase,
        }
    }

    pub(crate) fn configuration(message: impl Into<String>, field: &str) -> Self {
        GuessError::Configuration {
            message: message.into(),
            field: field.to_string(),
        }
    }

    /// True when the caller should reset before trying again
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, GuessError::InvalidState { .. })
    }
}

/// Type alias for the main result type used throughout the library
pub type GameResult<T> = Result<T, GuessError>;

/// Logging configuration and initialization
pub mod logging {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    /// Logging output format
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LogFormat {
        Human,
        Json,
    }

    /// Logging output destination
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LogOutput {
        Stdout,
        Stderr,
    }

    /// Logging configuration
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        pub level: Level,
        pub format: LogFormat,
        pub output: LogOutput,
    }

    impl Default for LoggingConfig {
        // Stderr keeps log lines out of the interactive prompt.
        fn default() -> Self {
            Self {
                level: Level::WARN,
                format: LogFormat::Human,
                output: LogOutput::Stderr,
            }
        }
    }

    /// Initialize structured logging with the given configuration
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(config.level.into())
            .from_env_lossy()
            .add_directive("rustyline=warn".parse()?);

        let registry = tracing_subscriber::registry().with(env_filter);

        match config.format {
            LogFormat::Human => {
                let fmt_layer = fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true);

                match config.output {
                    LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init()?,
                    LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init()?,
                }
            }
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE);

                match config.output {
                    LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init()?,
                    LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init()?,
                }
            }
        }

        Ok(())
    }

    /// Build a logging configuration from `NUMGUESS_LOG_*` variables
    pub fn config_from_env() -> LoggingConfig {
        let level = env::var("NUMGUESS_LOG_LEVEL")
            .unwrap_or_else(|_| "warn".to_string())
            .parse::<Level>()
            .unwrap_or(Level::WARN);

        let format = match env::var("NUMGUESS_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };

        let output = match env::var("NUMGUESS_LOG_OUTPUT").as_deref() {
            Ok("stdout") => LogOutput::Stdout,
            _ => LogOutput::Stderr,
        };

        LoggingConfig { level, format, output }
    }

    /// Initialize logging with environment-based configuration
    pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        init_logging(config_from_env())
    }
}
