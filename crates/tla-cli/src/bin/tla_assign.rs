// tla-assign: Assign three-letter codes to city names from stdin.
//
// Reads city names from stdin (one per line, upper-case letters and spaces)
// and prints one line per city that received a code:
//   CODE<TAB>NAME
//
// Usage:
//   tla-assign [OPTIONS]
//
// Options:
//   -n, --node-limit N   Bound the backtracking search (default: unbounded;
//                        also read from TLA_NODE_LIMIT)
//   --json               Print a JSON document instead of lines
//   --stats              Print search statistics to stderr
//   -h, --help           Print help

use std::io::{self, Write};

use tla_network::{AssignmentEngine, parse_names};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tla_cli::wants_help(&args) {
        println!("tla-assign: Assign three-letter codes to city names from stdin.");
        println!();
        println!("Usage: tla-assign [OPTIONS]");
        println!();
        println!("Reads city names from stdin (one per line). Prints:");
        println!("  CODE<TAB>NAME    for every city that received a code");
        println!();
        println!("Options:");
        println!("  -n, --node-limit N   Bound the backtracking search (env: TLA_NODE_LIMIT)");
        println!("  --json               Print a JSON document instead of lines");
        println!("  --stats              Print search statistics to stderr");
        println!("  -h, --help           Print this help");
        return;
    }

    tla_cli::init_tracing();

    let (node_limit, args) =
        tla_cli::parse_node_limit(&args).unwrap_or_else(|e| tla_cli::fatal(&e));
    let env_limit = std::env::var(tla_cli::NODE_LIMIT_ENV).ok();
    let options = tla_cli::search_options(node_limit, env_limit.as_deref())
        .unwrap_or_else(|e| tla_cli::fatal(&e));

    let json = args.iter().any(|a| a == "--json");
    let show_stats = args.iter().any(|a| a == "--stats");

    let input = tla_cli::read_input_lines();
    let names = parse_names(&input).unwrap_or_else(|e| tla_cli::fatal(&e.to_string()));
    tracing::debug!(names = names.len(), "read city names");

    let result = AssignmentEngine::new(options).run(&names);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let statistics = show_stats.then_some(&result.statistics);
        let report = tla_cli::AssignReport::new(&result.network, &input, statistics);
        if let Err(e) = serde_json::to_writer_pretty(&mut out, &report) {
            tla_cli::fatal(&format!("failed to write JSON: {e}"));
        }
        let _ = writeln!(out);
    } else {
        let _ = write!(out, "{}", result.network);
        if show_stats {
            eprintln!("{}", result.statistics);
        }
    }
}
