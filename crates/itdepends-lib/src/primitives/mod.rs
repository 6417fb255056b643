//! itdepends primitives - core types, errors, and coordination
//!
//! Central collection of shared types that form the foundation of itdepends.
//! Everything here works together: identities key the graph, records carry
//! manifest data, diagnostics report non-fatal findings, errors chain properly.

use std::path::PathBuf;
use thiserror::Error;

/// Canonical project identity derived from a manifest path
pub mod identity;
pub use identity::Identity;

/// Parsed manifest records and their building blocks
pub mod project;
pub use project::{OutputKind, PackageReference, ProjectRecord, ProjectReference, UNKNOWN_VERSION};

/// Errors raised while resolving entries and building the graph
///
/// `NotFound` and `UnsupportedInput` are fatal for the explicit entry point.
/// Parse failures inside the traversal never surface as errors; they degrade
/// to stub nodes with a [`Diagnostic`] attached to the build outcome.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("unsupported input file (expected .sln or .csproj): {path}")]
    UnsupportedInput { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed manifest {path}: {detail}")]
    Xml { path: PathBuf, detail: String },

    #[error("project not in graph: {name}")]
    ProjectNotInGraph { name: String },
}

/// Non-fatal findings collected while building a graph
///
/// These are returned alongside the graph instead of being swallowed into
/// log output, so callers can render or assert on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("dangling project reference: {referrer} -> {target}")]
    DanglingReference { referrer: Identity, target: PathBuf },

    #[error("failed to parse manifest {path}: {detail}")]
    ParseFailure { path: PathBuf, detail: String },

    #[error("solution member not found on disk: {path}")]
    MissingProject { path: PathBuf },
}

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Map a numeric verbosity (0-4, clamped) to a level
    pub fn from_verbosity(value: u8) -> Self {
        match value {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable compact text
    Text,
    /// Line-delimited JSON
    Json,
}

/// Logger configuration assembled from application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("logger initialization failed: {reason}")]
    InitializationFailed { reason: String },
}
