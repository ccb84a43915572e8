//! Headball - headless AI vs AI match runner
//!
//! Runs one or more complete matches as fast as the CPU allows and prints
//! the results as JSON.

use headball::{MatchConfig, run_match};

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = parse_flag(&args, "--seed").unwrap_or(0);
    let duration: u32 = parse_flag(&args, "--duration").unwrap_or(90);
    let matches: u64 = parse_flag(&args, "--matches").unwrap_or(1);
    let quiet = args.iter().any(|a| a == "--quiet");

    let mut results = Vec::new();
    for i in 0..matches {
        let config = MatchConfig {
            duration_secs: duration,
            seed: seed.wrapping_add(i),
            ..Default::default()
        };

        if !quiet && matches > 1 {
            eprintln!("Match {}/{} (seed {})...", i + 1, matches, config.seed);
        }
        results.push(run_match(config));
    }

    if matches == 1 {
        println!("{}", serde_json::to_string_pretty(&results[0]).unwrap());
    } else {
        println!("{}", serde_json::to_string_pretty(&results).unwrap());

        let left: u32 = results.iter().map(|r| r.score_left).sum();
        let right: u32 = results.iter().map(|r| r.score_right).sum();
        eprintln!(
            "Totals over {} matches: {} - {} (avg {:.1} - {:.1})",
            matches,
            left,
            right,
            left as f32 / matches as f32,
            right as f32 / matches as f32
        );
    }
}
