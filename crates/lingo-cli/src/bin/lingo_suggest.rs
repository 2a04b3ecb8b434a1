// lingo-suggest: Suggest corpus words for unknown tokens.
//
// Loads a corpus, then reads query words from arguments or stdin (one per
// line) and prints up to three suggestions for each word the corpus has not
// seen. Known words are printed as-is.
//
// Usage:
//   lingo-suggest [-c CORPUS] [OPTIONS] [WORD...]
//
// Options:
//   -c, --corpus PATH   Corpus text file
//   -v, --verbose       Show frequency and shared prefix of each suggestion
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use lingo_trie::SpellChecker;

fn main() {
    lingo_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (corpus_path, args) =
        lingo_cli::parse_corpus_path(&args).unwrap_or_else(|e| lingo_cli::fatal(&e));

    if lingo_cli::wants_help(&args) {
        println!("lingo-suggest: Suggest corpus words for unknown tokens.");
        println!();
        println!("Usage: lingo-suggest [-c CORPUS] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH   Corpus text file (default: $LINGO_CORPUS,");
        println!("                      ~/.lingo/corpus.txt, ./corpus.txt)");
        println!("  -v, --verbose       Show frequency and shared prefix");
        println!("  -h, --help          Print this help");
        return;
    }

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let checker =
        lingo_cli::load_checker(corpus_path.as_deref()).unwrap_or_else(|e| lingo_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    log::error!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            let _ = suggest_word(word, &checker, verbose, &mut out);
        }
    } else {
        for word in words {
            let _ = suggest_word(word, &checker, verbose, &mut out);
        }
    }
}

fn suggest_word(
    word: &str,
    checker: &SpellChecker,
    verbose: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    if checker.is_known(word) {
        return writeln!(out, "{word} (known)");
    }
    let suggestions = match checker.suggest(word) {
        Ok(s) => s,
        Err(e) => return writeln!(out, "{word}: error: {e}"),
    };
    if suggestions.is_empty() {
        return writeln!(out, "{word}: (no suggestions)");
    }
    writeln!(out, "{word}:")?;
    for s in &suggestions {
        if verbose {
            let prefix = s.shared_prefix.map_or_else(|| "-".to_string(), |d| d.to_string());
            writeln!(out, "  {} (freq {}, prefix {prefix})", s.word, s.frequency)?;
        } else {
            writeln!(out, "  {}", s.word)?;
        }
    }
    Ok(())
}
