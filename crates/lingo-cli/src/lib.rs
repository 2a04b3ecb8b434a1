// lingo-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lingo_trie::SpellChecker;

/// Default corpus file name.
const CORPUS_FILE: &str = "corpus.txt";

/// Environment variable naming the corpus file.
const CORPUS_ENV: &str = "LINGO_CORPUS";

/// Environment variable with an `env_logger` filter, used when `RUST_LOG`
/// is unset.
const LOG_ENV: &str = "LINGO_LOG";

/// Install the logger. Defaults to `warn`; `RUST_LOG` or `LINGO_LOG`
/// override it.
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn);
    if let Ok(filter) = std::env::var("RUST_LOG").or_else(|_| std::env::var(LOG_ENV)) {
        builder.parse_filters(&filter);
    }
    builder.format_timestamp(None).init();
}

/// Search for a corpus file and build a SpellChecker from it.
///
/// Search order:
/// 1. `corpus_path` argument (if provided)
/// 2. `LINGO_CORPUS` environment variable
/// 3. `~/.lingo/corpus.txt`
/// 4. `corpus.txt` in the current working directory
pub fn load_checker(corpus_path: Option<&str>) -> Result<SpellChecker, String> {
    let search_paths = build_search_paths(
        corpus_path,
        std::env::var(CORPUS_ENV).ok(),
        home_dir(),
        std::env::current_dir().ok(),
    );
    load_first(&search_paths)
}

/// Build a SpellChecker from the first existing file in `search_paths`.
fn load_first(search_paths: &[PathBuf]) -> Result<SpellChecker, String> {
    for path in search_paths {
        if path.is_file() {
            log::info!("loading corpus {}", path.display());
            return SpellChecker::from_path(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find a corpus in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate corpus files.
fn build_search_paths(
    corpus_path: Option<&str>,
    env_path: Option<String>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = corpus_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LINGO_CORPUS environment variable
    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
    }

    // 3. Home directory
    if let Some(home) = home {
        paths.push(home.join(".lingo").join(CORPUS_FILE));
    }

    // 4. Current directory
    if let Some(cwd) = cwd {
        paths.push(cwd.join(CORPUS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--corpus=PATH`, `--corpus PATH` or `-c PATH` argument.
///
/// Returns `(corpus_path, remaining_args)`, or an error message if the flag
/// has no value.
pub fn parse_corpus_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut corpus_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--corpus=") {
            corpus_path = Some(val.to_string());
        } else if arg == "--corpus" || arg == "-c" {
            match iter.next() {
                Some(val) => corpus_path = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((corpus_path, remaining))
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
