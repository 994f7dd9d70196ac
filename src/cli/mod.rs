//! CLI surface for commlab.
//!
//! Goal:
//! - One interactive lab (`parity`) plus one-shot demos (`checksum`, `route`)
//! - Extensible command tree + thin handlers
//! - Forgiving flag parsing (boolish flags, case/dash tolerance)

use std::ffi::OsString;

use clap::{ArgAction, Parser, builder::BoolishValueParser};
use serde::Serialize;

use crate::Result;

mod commands;
mod render;

pub use commands::Commands;

// =============================================================================
// Entry + global options
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "commlab",
    version,
    about = "Interactive teaching lab for parity, checksums, and distance-vector routing",
    infer_subcommands = true,
    infer_long_args = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Machine-readable JSON output for one-shot commands (default: false).
    #[arg(
        long,
        global = true,
        default_value_t = false,
        num_args = 0..=1,
        value_parser = BoolishValueParser::new()
    )]
    pub json: bool,

    /// Errors only.
    #[arg(
        short = 'q',
        long,
        global = true,
        default_value_t = false,
        num_args = 0..=1,
        value_parser = BoolishValueParser::new()
    )]
    pub quiet: bool,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

// =============================================================================
// Public API
// =============================================================================

/// Parse CLI from raw args, applying flag normalization.
pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw: Vec<OsString> = args.into_iter().map(|t| t.into()).collect();
    Cli::parse_from(normalize_args(raw))
}

/// Run the CLI (used by bin).
pub fn run(cli: Cli) -> Result<()> {
    commands::dispatch(cli.command, cli.json)
}

// =============================================================================
// Output helper
// =============================================================================

/// Print a payload: pretty JSON under `--json`, otherwise the given
/// human rendering.
fn print_ok<T: Serialize>(payload: &T, human: &str, json: bool) -> Result<()> {
    let s = if json {
        serde_json::to_string_pretty(payload)
            .map_err(|e| std::io::Error::other(e.to_string()))?
    } else {
        human.to_string()
    };

    use std::io::Write;
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{s}")
        && e.kind() != std::io::ErrorKind::BrokenPipe
    {
        return Err(e.into());
    }
    Ok(())
}

// =============================================================================
// Parsing helpers
// =============================================================================

fn normalize_args(mut raw: Vec<OsString>) -> Vec<OsString> {
    if raw.is_empty() {
        return raw;
    }

    let mut out = Vec::with_capacity(raw.len());
    out.push(raw.remove(0)); // program name

    for arg in raw {
        let s = arg.to_string_lossy();
        if s.starts_with("--") {
            let mut pieces = s.splitn(2, '=');
            let flag = pieces.next().unwrap_or("");
            let val = pieces.next();
            let mut canon = flag.to_lowercase().replace('_', "-");
            canon = canonical_flag(&canon).to_string();
            if let Some(v) = val {
                out.push(OsString::from(format!("{canon}={v}")));
            } else {
                out.push(OsString::from(canon));
            }
        } else {
            out.push(arg);
        }
    }
    out
}

fn canonical_flag(flag: &str) -> &str {
    match flag {
        "--edges" | "--link" => "--edge",
        "--from" | "--start" => "--source",
        "--steps" => "--trace",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        parse_from(std::iter::once("commlab").chain(args.iter().copied()))
    }

    #[test]
    fn parses_parity_subcommand() {
        let cli = parse(&["parity"]);
        assert!(matches!(cli.command, Commands::Parity));
        assert!(!cli.json);
    }

    #[test]
    fn normalizes_flag_aliases_and_case() {
        let cli = parse(&["route", "--EDGES", "A:B:1", "--from", "A"]);
        let Commands::Route(args) = cli.command else {
            panic!("expected route");
        };
        assert_eq!(args.edges.len(), 1);
        assert_eq!(args.source, "A");
    }

    #[test]
    fn global_flags_anywhere() {
        let cli = parse(&["checksum", "sum", "hello", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
