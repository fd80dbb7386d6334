// tla-validate: Check codes against city names from stdin.
//
// Reads lines of the form `CODE NAME` from stdin and reports whether the
// code is a valid three-letter code for the name:
//   V: CODE NAME    (valid)
//   I: CODE NAME    (invalid)
//
// Usage:
//   tla-validate [-h]

use std::io::{self, Write};

use tla_network::is_valid_code;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tla_cli::wants_help(&args) {
        println!("tla-validate: Check codes against city names from stdin.");
        println!();
        println!("Usage: tla-validate");
        println!();
        println!("Reads lines `CODE NAME` from stdin. Prints:");
        println!("  V: CODE NAME    (valid)");
        println!("  I: CODE NAME    (invalid)");
        return;
    }

    tla_cli::init_tracing();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in tla_cli::read_input_lines() {
        let Some((code, name)) = tla_cli::split_code_line(&line) else {
            eprintln!("skipping malformed line: {line:?}");
            continue;
        };
        let tag = if is_valid_code(name, code) { 'V' } else { 'I' };
        let _ = writeln!(out, "{tag}: {code} {name}");
    }
}
