//! Mutant CLI — check DNA matrices against the mutant signature
//!
//! Commands:
//!   mutant check     — analyse one matrix given as six rows
//!   mutant batch     — analyse every matrix in a JSON file
//!   mutant reference — show the reference matrix and its derived sequences
//!   mutant random    — analyse randomly generated matrices

use mutant_dna::{
    Analyser, AnalyserConfig, CodonPair, DnaMatrix, Nucleotide, Symbol, VerdictLedger,
    parse_matrix,
};
use serde::Deserialize;
use std::env;
use std::process::ExitCode;

const EXIT_MUTANT: u8 = 0;
const EXIT_HUMAN: u8 = 1;
const EXIT_REJECTED: u8 = 2;

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        mutant v0.1 — Mutant DNA detection                    ║
╚══════════════════════════════════════════════════════════════╝

Usage: mutant [--config <file>] <command> [options]

Commands:
  check      <row1> <row2> <row3> <row4> <row5> <row6>   Analyse one matrix
  batch      <file>                                      Analyse a JSON batch
  reference                                              Show the reference matrix
  random     [count]                                     Analyse random matrices (default 100)
  help                                                   Show this message

Rows are six symbols from A, C, G, T. A batch file is a JSON array of
objects like {{"dna": ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]}}.

Exit status for check: 0 mutant, 1 human, 2 rejected input.
The batch command also prints every verdict record as JSON.

Examples:
  mutant check ATGCGA CAGTGC TTATGT AGAAGG CCCCTA TCACTG
  mutant batch requests.json
  mutant --config analyser.json random 1000
"#
    );
}

#[derive(Debug, Deserialize)]
struct BatchEntry {
    dna: Vec<String>,
}

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match take_config(&mut args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  {}", e);
            return ExitCode::from(EXIT_REJECTED);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter.as_str()))
        .format_timestamp_millis()
        .init();

    let analyser = match Analyser::from_config(&config) {
        Ok(analyser) => analyser,
        Err(e) => {
            log::error!("Failed to build analyser: {}", e);
            eprintln!("  {}", e);
            return ExitCode::from(EXIT_REJECTED);
        }
    };

    ExitCode::from(run(&analyser, &args))
}

/// Dispatch a command, returning the process exit status
fn run(analyser: &Analyser<Nucleotide>, args: &[String]) -> u8 {
    let Some(command) = args.first() else {
        print_usage();
        return 0;
    };

    match command.as_str() {
        "check" => cmd_check(analyser, &args[1..]),
        "batch" => cmd_batch(analyser, &args[1..]),
        "reference" => cmd_reference(analyser),
        "random" => cmd_random(analyser, &args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            EXIT_REJECTED
        }
    }
}

/// Strip `--config <file>` from the arguments and load it
fn take_config(args: &mut Vec<String>) -> Result<AnalyserConfig, String> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(AnalyserConfig::default());
    };
    if pos + 1 >= args.len() {
        return Err("--config requires a file path".to_string());
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    AnalyserConfig::load(&path).map_err(|e| format!("Failed to load config {}: {}", path, e))
}

/// Parse a batch file body: a JSON array of `{"dna": [...]}` objects
fn parse_batch(json: &str) -> Result<Vec<BatchEntry>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

fn describe_matches(analyser: &Analyser<Nucleotide>, matrix: &DnaMatrix<Nucleotide>) {
    for index in analyser.matching_rows(matrix) {
        let row = &matrix.rows()[index];
        if let Some(direction) = analyser.reference().locate(row) {
            println!("    row {} ({}) matches reference {}", index + 1, row, direction);
        }
    }
}

fn cmd_check(analyser: &Analyser<Nucleotide>, args: &[String]) -> u8 {
    let matrix = match parse_matrix::<Nucleotide, _>(args) {
        Ok(matrix) => matrix,
        Err(e) => {
            eprintln!("  DNA is not valid: {}", e);
            return EXIT_REJECTED;
        }
    };

    let mutant = analyser.is_mutant(&matrix);
    println!("\n{}\n", matrix);
    describe_matches(analyser, &matrix);
    if mutant {
        println!("\n  DNA is mutant");
        EXIT_MUTANT
    } else {
        println!("\n  DNA is not mutant");
        EXIT_HUMAN
    }
}

fn cmd_batch(analyser: &Analyser<Nucleotide>, args: &[String]) -> u8 {
    let Some(path) = args.first() else {
        eprintln!("Usage: mutant batch <file>");
        return EXIT_REJECTED;
    };

    let entries = match std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| parse_batch(&json))
    {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("  Failed to read batch {}: {}", path, e);
            return EXIT_REJECTED;
        }
    };

    let mut ledger = VerdictLedger::new();
    let mut rejected = 0usize;
    for (i, entry) in entries.iter().enumerate() {
        match parse_matrix::<Nucleotide, _>(entry.dna.as_slice()) {
            Ok(matrix) => {
                let mutant = analyser.is_mutant(&matrix);
                ledger.record(&matrix, mutant);
                println!("  [{}] {}", i + 1, if mutant { "mutant" } else { "human" });
            }
            Err(e) => {
                log::warn!("Rejected batch entry {}: {}", i + 1, e);
                println!("  [{}] rejected: {}", i + 1, e);
                rejected += 1;
            }
        }
    }

    println!("\n  {} ({} rejected)", ledger.summary(), rejected);
    match serde_json::to_string_pretty(ledger.records()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("  Failed to serialize records: {}", e),
    }
    print_statistics(&ledger);
    0
}

fn cmd_reference(analyser: &Analyser<Nucleotide>) -> u8 {
    let reference = analyser.reference();
    println!("\n  Bases:");
    for base in Nucleotide::ALPHABET {
        println!("    {} = {}", base.name(), base.chemical_name());
    }
    println!("\n  Reference matrix:");
    for line in reference.to_string().lines() {
        println!("    {}", line);
    }
    println!("\n  Scanned sequences:");
    for (direction, pair) in reference.sequences() {
        println!("    {:<22} {}", direction.to_string(), pair);
    }
    0
}

fn cmd_random(analyser: &Analyser<Nucleotide>, args: &[String]) -> u8 {
    let count: usize = match args.first() {
        None => 100,
        Some(arg) => match arg.parse() {
            Ok(count) => count,
            Err(e) => {
                eprintln!("  Invalid count '{}': {}", arg, e);
                return EXIT_REJECTED;
            }
        },
    };
    let mut rng = rand::thread_rng();
    let mut ledger = VerdictLedger::new();

    for _ in 0..count {
        let matrix = DnaMatrix::from_rows(std::array::from_fn(|_| CodonPair::random(&mut rng)));
        let mutant = analyser.is_mutant(&matrix);
        if mutant {
            println!("\n{}\n", matrix);
            describe_matches(analyser, &matrix);
        }
        ledger.record(&matrix, mutant);
    }

    println!("\n  {}", ledger.summary());
    print_statistics(&ledger);
    0
}

fn print_statistics(ledger: &VerdictLedger) {
    match serde_json::to_string_pretty(&ledger.statistics()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("  Failed to serialize statistics: {}", e),
    }
}
