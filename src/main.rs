//! Corpus encoder binary.
//!
//! Reads a JSON corpus of raw per-concept sensory ratings, derives the
//! corpus-wide precision weights, min-max normalizes each modality column,
//! encodes every concept, and writes the run report as JSON.
//!
//! Corpus format (raw ratings, channel order Auditory, Gustatory, Haptic,
//! Olfactory, Visual):
//!
//!   { "apple": [1.2, 4.8, 3.1, 3.9, 5.6], "justice": [0.7, 0.1, ...], ... }
//!
//! Examples:
//!   sensecode corpus.json
//!   sensecode corpus.json --time-steps 1000 --tolerance 2 --seed 42
//!   sensecode corpus.json --threshold 5 --tau 0.1 --out codes.json

use std::collections::BTreeMap;
use std::process;
use std::str::FromStr;

use tracing::info;

use sensecode::{encode_corpus, ChannelWeights, PipelineConfig, MODALITY_COUNT};

fn print_help() {
    eprintln!("Usage: sensecode <corpus.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --time-steps N   spike train length in steps (default 1000)");
    eprintln!("  --tolerance N    binarization window size in steps (default 2)");
    eprintln!("  --threshold X    neuron firing threshold (default 5)");
    eprintln!("  --tau X          neuron leak time constant (default 0.1)");
    eprintln!("  --bias X         constant bias on the projected current (default off)");
    eprintln!("  --seed N         base seed for spike sampling");
    eprintln!("  --out FILE       write the report JSON to FILE instead of stdout");
}

fn parse_flag<T: FromStr>(value: Option<String>, flag: &str) -> T {
    let Some(raw) = value else {
        eprintln!("{flag} needs a value");
        process::exit(2);
    };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("{flag}: cannot parse {raw:?}");
            process::exit(2);
        }
    }
}

/// Min-max normalize each modality column across the corpus. Rows with the
/// wrong arity are passed through untouched; the core skips them with a
/// malformed-vector reason instead of this binary guessing at them.
fn normalize_corpus(
    raw: &BTreeMap<String, Vec<f32>>,
    columns: &[Vec<f32>; MODALITY_COUNT],
) -> Vec<(String, Vec<f32>)> {
    let mut lo = [f32::INFINITY; MODALITY_COUNT];
    let mut hi = [f32::NEG_INFINITY; MODALITY_COUNT];
    for (m, column) in columns.iter().enumerate() {
        for &v in column {
            lo[m] = lo[m].min(v);
            hi[m] = hi[m].max(v);
        }
    }

    raw.iter()
        .map(|(concept, values)| {
            let normalized = if values.len() == MODALITY_COUNT {
                values
                    .iter()
                    .enumerate()
                    .map(|(m, &v)| (v - lo[m]) / (hi[m] - lo[m]))
                    .collect()
            } else {
                values.clone()
            };
            (concept.clone(), normalized)
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut corpus_path: Option<String> = None;
    let mut out_path: Option<String> = None;
    let mut cfg = PipelineConfig::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return;
            }
            "--time-steps" => cfg.time_steps = parse_flag(args.next(), "--time-steps"),
            "--tolerance" => cfg.tolerance = parse_flag(args.next(), "--tolerance"),
            "--threshold" => cfg.threshold = parse_flag(args.next(), "--threshold"),
            "--tau" => cfg.tau = parse_flag(args.next(), "--tau"),
            "--bias" => cfg.bias = Some(parse_flag(args.next(), "--bias")),
            "--seed" => cfg.seed = Some(parse_flag(args.next(), "--seed")),
            "--out" => out_path = Some(parse_flag(args.next(), "--out")),
            other if !other.starts_with('-') && corpus_path.is_none() => {
                corpus_path = Some(other.to_string());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_help();
                process::exit(2);
            }
        }
    }

    let Some(corpus_path) = corpus_path else {
        print_help();
        process::exit(2);
    };

    let text = match std::fs::read_to_string(&corpus_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {corpus_path}: {err}");
            process::exit(1);
        }
    };

    // BTreeMap keeps concept order stable run to run.
    let raw: BTreeMap<String, Vec<f32>> = match serde_json::from_str(&text) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("cannot parse {corpus_path}: {err}");
            process::exit(1);
        }
    };

    // Variance is taken over the raw columns, before normalization; only
    // rows with the full five channels contribute to the statistics.
    let mut columns: [Vec<f32>; MODALITY_COUNT] = std::array::from_fn(|_| Vec::new());
    for values in raw.values() {
        if values.len() == MODALITY_COUNT {
            for (column, &v) in columns.iter_mut().zip(values.iter()) {
                column.push(v);
            }
        }
    }

    let weights = match ChannelWeights::from_columns(&columns) {
        Ok(weights) => weights,
        Err(err) => {
            // No weights means no encoding is possible for anything.
            eprintln!("weight derivation failed: {err}");
            process::exit(1);
        }
    };
    info!(weights = ?weights.as_array(), "derived channel weights");

    let corpus = normalize_corpus(&raw, &columns);
    let report = encode_corpus(&corpus, &weights, &cfg);
    info!(
        encoded = report.codes.len(),
        skipped = report.skipped.len(),
        "corpus run finished"
    );

    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("cannot serialize report: {err}");
            process::exit(1);
        }
    };

    match out_path {
        Some(path) => {
            if let Err(err) = std::fs::write(&path, json) {
                eprintln!("cannot write {path}: {err}");
                process::exit(1);
            }
        }
        None => println!("{json}"),
    }
}
