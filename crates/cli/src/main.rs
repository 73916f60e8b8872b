//! Masked-memory decoder CLI.
//!
//! This binary is the harness around the decoding core. It performs:
//! 1. **Input:** Reads a program file (one `mask = …` / `mem[…] = …` command per line).
//! 2. **Strategy selection:** Evaluates one decoding strategy or both, each on a fresh decoder.
//! 3. **Reporting:** Prints each run's memory sum, execution time, and statistics,
//!    as text or JSON.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::time::Instant;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use maskmem_core::config::Config;
use maskmem_core::decoder::{Decoder, DecodingStrategy};
use maskmem_core::parse_program;
use maskmem_core::stats::RunStats;

#[derive(Parser, Debug)]
#[command(
    name = "maskmem",
    version,
    about = "Masked-memory program decoder",
    long_about = "Decode a masked-memory initialization program and report the sum of all \
values resident in memory afterwards.\n\nBy default both decoding strategies are evaluated, \
each on an independent decoder.\n\nExamples:\n  maskmem run -f input.txt\n  maskmem run -f \
input.txt --strategy address-floating\n  maskmem run -f input.txt --config run.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a program file and report the final memory sum per strategy.
    Run {
        /// Program file: one `mask = …` or `mem[…] = …` command per line.
        #[arg(short, long)]
        file: String,

        /// Strategy to evaluate (overrides the config file).
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<String>,

        /// Emit the report as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
}

/// Strategy selection as spelled on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Mask the written value; use the address verbatim.
    ValueMasking,
    /// Expand the written address over its floating bits; store the raw value.
    AddressFloating,
    /// Evaluate both strategies, each on an independent decoder.
    Both,
}

/// One strategy evaluation in the machine-readable report.
#[derive(Debug, Serialize)]
struct StrategyReport {
    strategy: DecodingStrategy,
    memory_sum: u64,
    elapsed_ms: f64,
    stats: RunStats,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            strategy,
            config,
            json,
        }) => cmd_run(&file, strategy, config.as_deref(), json),
        None => {
            eprintln!("maskmem — pass a subcommand");
            eprintln!();
            eprintln!("  maskmem run -f <program>                      Evaluate both strategies");
            eprintln!("  maskmem run -f <program> --strategy <which>   Evaluate one strategy");
            eprintln!();
            eprintln!("  maskmem --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs the decoder: loads config and program, evaluates the selected
/// strategies on fresh decoders, and prints the report.
///
/// Exits with code 1 on unreadable files, malformed config, a parse error
/// naming the offending line, or a write that precedes the first mask.
fn cmd_run(file: &str, strategy: Option<StrategyArg>, config_path: Option<&str>, json: bool) {
    let config = load_config(config_path);
    init_tracing(&config);

    let input = fs::read_to_string(file).unwrap_or_else(|e| {
        eprintln!("Error reading program {file}: {e}");
        process::exit(1);
    });
    let program = parse_program(&input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    if !json {
        println!("Program: {file} ({} commands)", program.len());
        println!();
    }

    let mut reports = Vec::new();
    for strategy in selected_strategies(strategy, &config) {
        let started = Instant::now();
        let mut decoder = Decoder::new(strategy);
        if let Err(e) = decoder.run(&program) {
            eprintln!("Error under {strategy}: {e}");
            process::exit(1);
        }
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let memory_sum = decoder.memory_values_sum();

        if json {
            reports.push(StrategyReport {
                strategy,
                memory_sum,
                elapsed_ms,
                stats: *decoder.stats(),
            });
        } else {
            println!("[{strategy}] memory sum: {memory_sum}");
            println!("  execution time: {elapsed_ms:.2} ms");
            decoder.stats().print();
            println!();
        }
    }

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                process::exit(1);
            }
        }
    }
}

/// Loads the JSON config file, or the defaults when none was given.
fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error in config {path}: {e}");
        process::exit(1);
    })
}

/// Installs the log subscriber. `RUST_LOG` wins; otherwise `trace_commands`
/// selects per-command visibility.
fn init_tracing(config: &Config) {
    let default_level = if config.trace_commands { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the strategy list: CLI flag first, then config, then both.
fn selected_strategies(flag: Option<StrategyArg>, config: &Config) -> Vec<DecodingStrategy> {
    match flag {
        Some(StrategyArg::ValueMasking) => vec![DecodingStrategy::ValueMasking],
        Some(StrategyArg::AddressFloating) => vec![DecodingStrategy::AddressFloating],
        Some(StrategyArg::Both) => both_strategies(),
        None => config.strategy.map_or_else(both_strategies, |s| vec![s]),
    }
}

fn both_strategies() -> Vec<DecodingStrategy> {
    vec![
        DecodingStrategy::ValueMasking,
        DecodingStrategy::AddressFloating,
    ]
}
