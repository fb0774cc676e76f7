//! Single drill CLI
//!
//! Usage: drillbook_run <drill> [args...]
//!        drillbook_run --list
//!
//! Lists are comma-separated; wrap arguments containing spaces in quotes.
//!
//! Example:
//!   drillbook_run coin_change 1,2,5 11
//!   drillbook_run is_palindrome_alphanumeric "A man, a plan, a canal: Panama"

use drillbook_algos::{Case, Drill, Technique, run_case};
use std::env;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <drill> [args...]", program);
    eprintln!("       {} --list", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --list, -l   List all drills with their arguments");
    eprintln!("  --help, -h   Show this help message");
}

fn print_catalog() {
    let mut current: Option<Technique> = None;
    for drill in Drill::ALL {
        if current != Some(drill.technique()) {
            current = Some(drill.technique());
            println!("[{}]", drill.technique());
        }
        println!("  {:<34} {}", drill.name(), drill.usage());
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_default();

    match args.get(1).map(String::as_str) {
        None => {
            print_usage(&program);
            std::process::exit(1);
        }
        Some("--help" | "-h") => {
            print_usage(&program);
            return;
        }
        Some("--list" | "-l") => {
            print_catalog();
            return;
        }
        Some(_) => {}
    }

    let case = match Case::from_fields(&args[1..]) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(drill) = args[1].parse::<Drill>() {
                eprintln!("Usage: {} {} {}", program, drill, drill.usage());
            } else {
                eprintln!("Run '{} --list' to see available drills.", program);
            }
            std::process::exit(1);
        }
    };

    match run_case(&case) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
