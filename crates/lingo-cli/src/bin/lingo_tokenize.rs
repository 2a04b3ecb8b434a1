// lingo-tokenize: Show how text is split into corpus tokens.
//
// Reads text from stdin and prints every token with its byte span, one
// per line, numbering lines from 1.
//
// Usage:
//   lingo-tokenize [OPTIONS]
//
// Options:
//   --count    Only print the number of tokens per line
//   -h, --help Print help

use std::io::{self, BufRead, Write};

use lingo_core::tokens;

fn main() {
    lingo_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if lingo_cli::wants_help(&args) {
        println!("lingo-tokenize: Show how text is split into corpus tokens.");
        println!();
        println!("Usage: lingo-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens as:");
        println!("  <line>:[<start>..<end>] <token>");
        println!();
        println!("Options:");
        println!("  --count     Only print the number of tokens per line");
        println!("  -h, --help  Print this help");
        return;
    }

    let count_only = args.iter().any(|a| a == "--count");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.unwrap_or_else(|e| lingo_cli::fatal(&format!("failed to read stdin: {e}")));
        let line_no = index + 1;
        if count_only {
            let _ = writeln!(out, "{line_no}: {}", tokens(&line).count());
            continue;
        }
        for token in tokens(&line) {
            let _ = writeln!(
                out,
                "{line_no}:[{:>4}..{:>4}] {}",
                token.pos,
                token.end(),
                token.text
            );
        }
    }
}
