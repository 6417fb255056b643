// Tests for CLI argument parsing

use super::*;
use clap::Parser;

#[test]
fn analyze_with_output_flag() {
    let cli = Cli::try_parse_from(["itdepends", "analyze", "All.sln", "-o", "graph.json"]).unwrap();
    match cli.command {
        Some(Commands::Analyze { input, output }) => {
            assert_eq!(input, PathBuf::from("All.sln"));
            assert_eq!(output, Some(PathBuf::from("graph.json")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn deps_transitive_flag() {
    let cli =
        Cli::try_parse_from(["itdepends", "deps", "All.sln", "App", "--transitive"]).unwrap();
    match cli.command {
        Some(Commands::Deps {
            project,
            transitive,
            ..
        }) => {
            assert_eq!(project, "App");
            assert!(transitive);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn no_command_is_allowed() {
    let cli = Cli::try_parse_from(["itdepends"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn log_flags_parse_into_config() {
    let cli = Cli::try_parse_from([
        "itdepends",
        "--log-level",
        "3",
        "--log-format",
        "json",
        "version",
    ])
    .unwrap();
    assert_eq!(cli.config.log_level, 3);
    assert_eq!(cli.config.log_format, crate::primitives::LogFormat::Json);
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["itdepends", "frobnicate"]).is_err());
}
