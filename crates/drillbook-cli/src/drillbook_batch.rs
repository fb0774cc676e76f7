//! Case file batch CLI
//!
//! Usage: drillbook_batch <cases-file> [options]
//!
//! Options:
//!   --output <PATH>  Report path (default: <cases-stem>.report.tsv next to the input)
//!   --sequential     Evaluate on the current thread instead of rayon
//!   --help, -h       Show help
//!
//! Example: drillbook_batch cases/dp.tsv --output dp.report.tsv

use drillbook_algos::infra::case_io::{get_report_path, load_cases, save_report};
use drillbook_algos::{BatchOptions, run_batch, run_batch_parallel};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    cases_path: PathBuf,
    output: Option<PathBuf>,
    sequential: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <cases-file> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <cases-file>     Tab-separated case file, one drill per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --output <PATH>  Report path (default: <cases-stem>.report.tsv)");
    eprintln!("  --sequential     Evaluate on the current thread instead of rayon");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut cases_path: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut sequential = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                let value = args.get(i).ok_or("--output requires a value")?;
                output = Some(PathBuf::from(value));
            }
            "--sequential" => sequential = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if cases_path.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                cases_path = Some(PathBuf::from(arg));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let cases_path = cases_path.ok_or("Missing cases-file argument")?;

    Ok(Args {
        cases_path,
        output,
        sequential,
    })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    println!("Loading cases from {}...", args.cases_path.display());
    let start = Instant::now();

    let cases = match load_cases(&args.cases_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading cases: {}", e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} case(s).", cases.len());

    let eval_start = Instant::now();
    let results = if args.sequential {
        println!("Evaluating sequentially...");
        run_batch(&cases)
    } else {
        println!("Evaluating in parallel...");
        let options = BatchOptions::default().with_progress(|current: u32, total: u32| {
            let progress = if total > 0 {
                (current as f64 / total as f64) * 100.0
            } else {
                100.0
            };
            print!("\r[Batch] Progress: {:.2}% ({}/{})", progress, current, total);
            let _ = io::stdout().flush();
        });
        let results = run_batch_parallel(&cases, options);
        println!();
        results
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    println!(
        "Evaluated {} case(s) in {:.3} seconds ({} failed)",
        results.len(),
        eval_start.elapsed().as_secs_f64(),
        failed
    );

    let report_path = args
        .output
        .unwrap_or_else(|| get_report_path(&args.cases_path));
    println!("Saving report to {}...", report_path.display());

    if let Err(e) = save_report(&report_path, &cases, &results) {
        eprintln!("Error saving report: {}", e);
        std::process::exit(1);
    }

    println!();
    println!(
        "Done! Total time: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
}
