// tla-candidates: List the valid codes of city names from stdin.
//
// For every input name prints the name followed by its valid codes in
// sorted order:
//   NAME: CODE CODE ...
//
// Usage:
//   tla-candidates [--all] [-h]
//
// Options:
//   --all        List every 3-letter subsequence, not just valid codes
//   -h, --help   Print help

use std::io::{self, Write};

use tla_core::{CityName, Code, generate_valid_tlas, valid_codes};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tla_cli::wants_help(&args) {
        println!("tla-candidates: List the valid codes of city names from stdin.");
        println!();
        println!("Usage: tla-candidates [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --all        List every 3-letter subsequence, not just valid codes");
        println!("  -h, --help   Print this help");
        return;
    }

    tla_cli::init_tracing();

    let all = args.iter().any(|a| a == "--all");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in tla_cli::read_input_lines() {
        let name = CityName::new(line).unwrap_or_else(|e| tla_cli::fatal(&e.to_string()));
        let codes: Vec<Code> = if all {
            let mut codes: Vec<Code> = generate_valid_tlas(&name).into_iter().collect();
            codes.sort_unstable();
            codes
        } else {
            valid_codes(&name)
        };
        let codes: Vec<&str> = codes.iter().map(Code::as_str).collect();
        let _ = writeln!(out, "{name}: {}", codes.join(" "));
    }
}
