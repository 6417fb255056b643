//! Application configuration management
//!
//! Precedence: defaults -> env vars -> CLI args, all handled by clap.

use clap::Parser;

use crate::primitives::{LogFormat, LogLevel, LogOutput, LoggerConfig};

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "1"; // Warnings and errors by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
}

/// Application configuration structure
#[derive(Debug, Clone, Parser)]
pub struct AppConfig {
    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "ITDEPENDS_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: u8,

    /// Log format (text, json)
    #[arg(long, env = "ITDEPENDS_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "ITDEPENDS_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    pub log_output: LogOutput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: 1,
            log_format: LogFormat::Text,
            log_output: LogOutput::Stderr,
        }
    }
}

impl AppConfig {
    /// Assemble the logger configuration for this run.
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
        }
    }
}
