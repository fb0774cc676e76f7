//! drillbook-algos - Classic introductory array and string algorithms
//!
//! This crate provides:
//! - Hashing/frequency, two-pointer, sliding-window, greedy and dynamic-programming routines
//! - A drill catalog that evaluates any routine from text arguments
//! - Sequential and rayon-parallel batch evaluation of case files

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::catalog::{CaseError, Drill, Technique};
pub use app::runner::{BatchOptions, Case, run_batch, run_batch_parallel, run_case};
pub use domain::error::AlgoError;
pub use domain::frequency::LetterCounts;
