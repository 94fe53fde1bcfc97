//! Demon life simulator CLI.
//!
//! Run Monte Carlo simulations of complete demon lives.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 lives
//!   cargo run --bin simulate -- -n 100          # 100 lives
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use imp::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Some(config) => config,
        None => {
            print_usage();
            return;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              IMP LIFE SIMULATOR                               ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Lives:          {}", config.num_lives);
    println!("  Max Ticks:      {}", config.max_ticks_per_life);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> Option<SimConfig> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--lives" => {
                if i + 1 < args.len() {
                    config.num_lives = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_life = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                // Handled after the run
            }
            "-h" | "--help" => {
                return None;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                return None;
            }
        }
        i += 1;
    }

    Some(config)
}

fn print_usage() {
    println!("Imp life simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --lives <N>   Number of lives to simulate (default 1000)");
    println!("  -s, --seed <N>    Seed for reproducible runs");
    println!("  -t, --ticks <N>   Max ticks per life (default 100000)");
    println!("  -v, --verbose     Print one line per life");
    println!("  -q, --quiet       Suppress per-life output");
    println!("      --json        Also write a timestamped JSON report");
    println!("  -h, --help        Show this help message");
}
