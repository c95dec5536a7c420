//! CLI command definitions

use clap::Parser;
use logbridge_domain::Severity;
use std::path::PathBuf;

/// CLI arguments for logbridge
#[derive(Parser, Debug)]
#[command(name = "logbridge")]
#[command(author, version, about = "Severity-gated logging with crash-report bridging")]
#[command(long_about = r#"
logbridge sends one log event through a configured Logger.

The event is filtered by the logger floor, then fanned out to:
1. The tracing writer (printed by the installed tracing subscriber)
2. The crash bridge, which leaves a breadcrumb and, for severe events
   with an attached error, submits a crash report

Configuration files are loaded from (in priority order):
1. LOGBRIDGE_* environment variables
2. --config <path>     Explicit config file
3. ./logbridge.toml    Project-level config
4. ~/.config/logbridge/config.toml   Global config

Example:
  logbridge -s info -t sys "boot complete"
  logbridge -s error -t sys --error IllegalStateException --address 0x7fff0001 "crash"
"#)]
pub struct Cli {
    /// The message to log
    pub message: Option<String>,

    /// Severity of the event (verbose, debug, info, warn, error, assert)
    #[arg(short, long, default_value = "info", value_parser = parse_severity)]
    pub severity: Severity,

    /// Tag attached to the event
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Attach an error with this symbolic name
    #[arg(long, value_name = "NAME")]
    pub error: Option<String>,

    /// Message of the attached error
    #[arg(long, value_name = "TEXT", requires = "error")]
    pub error_message: Option<String>,

    /// Return address of the attached error (repeatable, hex with 0x or decimal)
    #[arg(long = "address", value_name = "ADDR", value_parser = parse_address, requires = "error")]
    pub addresses: Vec<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse().map_err(|e: logbridge_domain::DomainError| e.to_string())
}

fn parse_address(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}
