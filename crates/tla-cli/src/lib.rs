// tla-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use serde::Serialize;
use tla_network::{CityEntry, Network, SearchOptions, SearchStatistics};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read when no `--node-limit` argument is given.
pub const NODE_LIMIT_ENV: &str = "TLA_NODE_LIMIT";

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Logs go to stderr so that stdout stays machine readable.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Parse a `--node-limit=N`, `--node-limit N` or `-n N` argument.
///
/// Returns `(node_limit, remaining_args)`.
pub fn parse_node_limit(args: &[String]) -> Result<(Option<u64>, Vec<String>), String> {
    let mut node_limit = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--node-limit=") {
            node_limit = Some(parse_limit(val)?);
        } else if arg == "--node-limit" || arg == "-n" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            node_limit = Some(parse_limit(val)?);
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((node_limit, remaining))
}

fn parse_limit(val: &str) -> Result<u64, String> {
    val.trim()
        .parse()
        .map_err(|e| format!("invalid node limit {val:?}: {e}"))
}

/// Build search options from the command-line limit, falling back to the
/// value of [`NODE_LIMIT_ENV`] (passed in as `env_value`).
pub fn search_options(arg_limit: Option<u64>, env_value: Option<&str>) -> Result<SearchOptions, String> {
    let limit = match (arg_limit, env_value) {
        (Some(limit), _) => Some(limit),
        (None, Some(val)) if !val.trim().is_empty() => Some(parse_limit(val)?),
        (None, _) => None,
    };
    Ok(SearchOptions { node_limit: limit })
}

/// Read non-blank lines from stdin, with line endings removed.
///
/// A read error is reported on stderr and ends the input.
pub fn read_input_lines() -> Vec<String> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(l) => {
                let l = l.trim_end_matches('\r');
                if !l.trim().is_empty() {
                    lines.push(l.to_string());
                }
            }
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
}

/// Split a `CODE NAME...` line into its code and city name.
pub fn split_code_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    let (code, name) = line.split_once(' ')?;
    let name = name.trim_start();
    if name.is_empty() {
        None
    } else {
        Some((code, name))
    }
}

/// JSON document printed by `tla-assign --json`.
#[derive(Debug, Serialize)]
pub struct AssignReport<'a> {
    pub cities: &'a [CityEntry],
    pub unassigned: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<&'a SearchStatistics>,
}

impl<'a> AssignReport<'a> {
    /// Report for `network` built from `input`. Input names without an entry
    /// are listed as unassigned, once each, in input order.
    pub fn new(
        network: &'a Network,
        input: &'a [String],
        statistics: Option<&'a SearchStatistics>,
    ) -> Self {
        let mut unassigned: Vec<&str> = Vec::new();
        for name in input {
            if network.code_of(name).is_none() && !unassigned.contains(&name.as_str()) {
                unassigned.push(name);
            }
        }
        Self {
            cities: network.entries(),
            unassigned,
            statistics,
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
