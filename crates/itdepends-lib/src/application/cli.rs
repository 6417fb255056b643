use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// itdepends CLI - .NET project dependency graphs
#[derive(Debug, Clone, Parser)]
#[command(name = "itdepends")]
#[command(about = "Reconstruct the project reference graph of a .NET codebase")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// itdepends commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Self {
        let cli = Cli::parse();
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available itdepends commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the dependency graph and optionally export it as JSON
    Analyze {
        /// Path to a .sln or .csproj file
        #[arg(help = "Solution or project file to analyze")]
        input: PathBuf,

        /// Write the graph as JSON to this path
        #[arg(short, long, help = "Output path for the JSON graph artifact")]
        output: Option<PathBuf>,
    },

    /// List the dependencies of one project
    Deps {
        /// Path to a .sln or .csproj file
        #[arg(help = "Solution or project file to analyze")]
        input: PathBuf,

        /// Project to inspect, by name or path
        #[arg(help = "Project name or manifest path")]
        project: String,

        /// Include transitive dependencies
        #[arg(short, long, help = "Walk the full transitive closure")]
        transitive: bool,
    },

    /// List every project that depends on one project
    Dependents {
        /// Path to a .sln or .csproj file
        #[arg(help = "Solution or project file to analyze")]
        input: PathBuf,

        /// Project to inspect, by name or path
        #[arg(help = "Project name or manifest path")]
        project: String,
    },

    /// Export the subgraph reachable from one project
    Focus {
        /// Path to a .sln or .csproj file
        #[arg(help = "Solution or project file to analyze")]
        input: PathBuf,

        /// Project to scope the graph to, by name or path
        #[arg(help = "Project name or manifest path")]
        project: String,

        /// Write the subgraph as JSON to this path
        #[arg(short, long, help = "Output path for the JSON graph artifact")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
