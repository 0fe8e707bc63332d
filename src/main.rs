use std::fs;
use std::io::{Read, Write};

use clap::Parser;
use serde::Serialize;

use tupaia::{Fetched, Hit, PhraseSet, Query};

mod cli;
use cli::display::{themed, BOLD, DIM, GRAY, GREEN, RED};
use cli::{Cli, Commands};

/// Machine-readable scan output for `--json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReport {
    matches: Vec<String>,
    count: usize,
    max_ngram: usize,
    phrases: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { dict, query, bytes } => run_check(&dict, &query, bytes),
        Commands::Get { dict, query, bytes } => run_get(&dict, &query, bytes),
        Commands::Scan {
            dict,
            text,
            max_ngram,
            bytes,
            json,
        } => run_scan(&dict, text.as_deref(), max_ngram, bytes, json),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            1
        }
    };
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

fn load_set(path: &str) -> Result<PhraseSet, String> {
    let buffer =
        fs::read(path).map_err(|e| format!("Failed to read dictionary {}: {}", path, e))?;
    Ok(PhraseSet::new(buffer))
}

fn query_for(raw: &str, bytes: bool) -> Query<'_> {
    if bytes {
        Query::Bytes(raw.as_bytes())
    } else {
        Query::Text(raw)
    }
}

/// Membership check. Exits 0 when the key is present, 1 when it is not.
fn run_check(dict: &str, raw: &str, bytes: bool) -> Result<i32, String> {
    let set = load_set(dict)?;
    if set.contains(query_for(raw, bytes)) {
        println!("{}", themed(GREEN, &[BOLD], "present"));
        Ok(0)
    } else {
        println!("{}", themed(RED, &[BOLD], "absent"));
        Ok(1)
    }
}

/// Value lookup. A present key with no recorded value prints nothing and
/// still exits 0; a missing key exits 1.
fn run_get(dict: &str, raw: &str, bytes: bool) -> Result<i32, String> {
    let set = load_set(dict)?;
    match set.get(query_for(raw, bytes)) {
        Fetched::Value(Hit::Text(value)) => {
            println!("{}", value);
            Ok(0)
        }
        Fetched::Value(Hit::Bytes(value)) => {
            let mut stdout = std::io::stdout();
            stdout
                .write_all(&value)
                .map_err(|e| format!("Failed to write value: {}", e))?;
            // Raw bytes get no trailing newline unless a human is watching
            if atty::is(atty::Stream::Stdout) {
                println!();
            }
            Ok(0)
        }
        Fetched::NoValue => {
            eprintln!("{}", themed(GRAY, &[DIM], "key present, no value recorded"));
            Ok(0)
        }
        Fetched::Missing => {
            eprintln!("{}", themed(GRAY, &[DIM], "key not found"));
            Ok(1)
        }
    }
}

/// Phrase scan. Matches print one per line (or as a JSON report with
/// `--json`); exits 1 when nothing matched, grep style.
fn run_scan(
    dict: &str,
    text: Option<&str>,
    max_ngram: usize,
    bytes: bool,
    json: bool,
) -> Result<i32, String> {
    let set = load_set(dict)?;

    let buffer: Vec<u8> = match text {
        Some(arg) => arg.as_bytes().to_vec(),
        None => {
            let mut raw = Vec::new();
            std::io::stdin()
                .read_to_end(&mut raw)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            raw
        }
    };

    let hits = if bytes {
        set.find_all_matches(Query::Bytes(&buffer), max_ngram)
    } else {
        let text = std::str::from_utf8(&buffer)
            .map_err(|_| "Input is not valid UTF-8; pass --bytes to scan raw bytes".to_string())?;
        set.find_all_matches(text, max_ngram)
    }
    .map_err(|e| e.to_string())?;

    if json {
        let report = ScanReport {
            matches: hits
                .iter()
                .map(|hit| match hit {
                    Hit::Text(s) => s.clone(),
                    Hit::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
                })
                .collect(),
            count: hits.len(),
            max_ngram,
            phrases: set.len(),
        };
        let serialized = serde_json::to_string(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", serialized);
    } else {
        let mut stdout = std::io::stdout();
        for hit in &hits {
            match hit {
                Hit::Text(s) => println!("{}", s),
                Hit::Bytes(b) => {
                    stdout
                        .write_all(b)
                        .map_err(|e| format!("Failed to write match: {}", e))?;
                    stdout
                        .write_all(b"\n")
                        .map_err(|e| format!("Failed to write match: {}", e))?;
                }
            }
        }
        eprintln!(
            "{}",
            themed(
                GRAY,
                &[DIM],
                &format!(
                    "{} matches over {} phrases, window {}",
                    hits.len(),
                    set.len(),
                    max_ngram
                ),
            )
        );
    }

    Ok(if hits.is_empty() { 1 } else { 0 })
}
