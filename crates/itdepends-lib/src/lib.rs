//! # itdepends Library
//!
//! Reconstructs the inter-project reference graph of a .NET codebase from
//! its solution (`.sln`) and project (`.csproj`) descriptor files.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, identities, errors, and diagnostics
//! - [`manifest`] - Manifest Reader: one `.csproj` to one project record
//! - [`solution`] - Workspace Entry Resolver: `.sln` to member project paths
//! - [`graph`] - Graph Builder, query surface, and JSON export
//! - [`application`] - CLI interface and command dispatch
//! - [`logger`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```no_run
//! let outcome = itdepends_lib::graph::build(std::path::Path::new("All.sln")).unwrap();
//! for record in outcome.graph.nodes() {
//!     println!("{}", record.display_name);
//! }
//! ```

pub mod application;
pub mod graph;
pub mod logger;
pub mod manifest;
pub mod primitives;
pub mod solution;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{BuildOutcome, DependencyGraph, GraphExport};
pub use logger::Logger;
pub use primitives::{
    Diagnostic, GraphError, Identity, OutputKind, PackageReference, ProjectRecord,
};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load();

    // Initialize logging before any work happens
    Logger::init(config.app_config.logger_config())?;

    // Execute the command
    execute_command(config)
}
