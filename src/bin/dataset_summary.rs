use std::path::PathBuf;

use clap::Parser;
use universle::io_utils::dataset_cli_error;
use universle::{available_hints, Dataset, HintKey};

/// Print how many institutions a dataset holds and how well each hint
/// attribute is covered.
#[derive(Parser)]
#[command(name = "dataset_summary")]
struct Args {
    /// Dataset file (.json or .csv); the built-in demo list is used if omitted
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let path = args.data.as_deref();
    let dataset = Dataset::load_or_fallback(path).map_err(|e| {
        dataset_cli_error(path.unwrap_or(std::path::Path::new("<builtin>")), e)
    })?;

    let total = dataset.len();
    let mut counts = [0usize; HintKey::ALL.len()];
    let mut hintless = 0usize;
    let none_used = Default::default();
    for inst in dataset.institutions() {
        let keys = available_hints(&inst.attributes, &none_used);
        if keys.is_empty() {
            hintless += 1;
        }
        for key in keys {
            counts[key as usize] += 1;
        }
    }

    println!("institutions: {total}");
    println!("without hints: {hintless}");
    for (key, count) in HintKey::ALL.iter().zip(counts) {
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        println!("{:<22} {:>6} ({:.1}%)", key.as_str(), count, pct);
    }
    Ok(())
}
