//! Case evaluation workflow
//!
//! This module runs a single drill from text arguments and evaluates batches
//! of independent cases, either sequentially or in parallel with rayon.

use crate::app::catalog::{CaseError, Drill, parse_list, parse_scalar};
use crate::constants::{MAX_DP_TABLE_LEN, PROGRESS_INTERVAL};
use crate::domain::{dp, frequency, greedy, sliding_window, two_pointer};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

/// A drill together with its text arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub drill: Drill,
    pub args: Vec<String>,
}

impl Case {
    /// Create a case, checking the argument count
    pub fn new(drill: Drill, args: Vec<String>) -> Result<Self, CaseError> {
        if args.len() != drill.arity() {
            return Err(CaseError::ArgumentCount {
                drill,
                expected: drill.arity(),
                found: args.len(),
            });
        }
        Ok(Self { drill, args })
    }

    /// Build a case from a drill name followed by its arguments
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, CaseError> {
        let (name, args) = fields
            .split_first()
            .ok_or_else(|| CaseError::UnknownDrill(String::new()))?;
        let drill: Drill = name.as_ref().trim().parse()?;
        Self::new(drill, args.iter().map(|a| a.as_ref().to_string()).collect())
    }
}

/// Reject DP tables larger than [`MAX_DP_TABLE_LEN`] entries
fn ensure_table_len(drill: Drill, required: u64) -> Result<(), CaseError> {
    if required > MAX_DP_TABLE_LEN {
        return Err(CaseError::TableTooLarge {
            drill,
            required,
            limit: MAX_DP_TABLE_LEN,
        });
    }
    Ok(())
}

/// Render an optional index the classic way (`-1` when absent)
fn render_index<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-1".to_string(), |v| v.to_string())
}

/// Run a single case and render its result as text
///
/// In-place drills render the buffer as left by the routine.
pub fn run_case(case: &Case) -> Result<String, CaseError> {
    let drill = case.drill;
    let args = &case.args;
    if args.len() != drill.arity() {
        return Err(CaseError::ArgumentCount {
            drill,
            expected: drill.arity(),
            found: args.len(),
        });
    }

    let rendered = match drill {
        Drill::ContainsDuplicate => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            frequency::contains_duplicate(&nums).to_string()
        }
        Drill::IsAnagram => frequency::is_anagram(&args[0], &args[1])?.to_string(),
        Drill::TopKFrequent => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            let k: usize = parse_scalar(drill, 1, &args[1])?;
            format!("{:?}", frequency::top_k_frequent(&nums, k))
        }
        Drill::RansomNote => frequency::ransom_note(&args[0], &args[1])?.to_string(),
        Drill::FirstUniqueChar => render_index(frequency::first_unique_char(&args[0])?),
        Drill::TwoSum => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            let target: i32 = parse_scalar(drill, 1, &args[1])?;
            format!("{:?}", frequency::two_sum(&nums, target)?)
        }
        Drill::IsPalindromeLowercase => two_pointer::is_palindrome_lowercase(&args[0]).to_string(),
        Drill::IsPalindromeAlphanumeric => {
            two_pointer::is_palindrome_alphanumeric(&args[0]).to_string()
        }
        Drill::RemoveDuplicatesSorted => {
            let mut nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            let unique = two_pointer::remove_duplicates_sorted(&mut nums)?;
            format!("{} {:?}", unique, &nums[..unique])
        }
        Drill::MoveZeroes => {
            let mut nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            two_pointer::move_zeroes(&mut nums);
            format!("{:?}", nums)
        }
        Drill::SortedSquares => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            format!("{:?}", two_pointer::sorted_squares(&nums)?)
        }
        Drill::TwoSumSorted => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            let target: i32 = parse_scalar(drill, 1, &args[1])?;
            format!("{:?}", two_pointer::two_sum_sorted(&nums, target)?)
        }
        Drill::ReverseString => {
            let mut chars: Vec<char> = args[0].chars().collect();
            two_pointer::reverse_string(&mut chars);
            chars.into_iter().collect()
        }
        Drill::LongestSubstringWithoutRepeats => {
            sliding_window::longest_substring_without_repeats(&args[0]).to_string()
        }
        Drill::FindAllAnagramPositions => format!(
            "{:?}",
            sliding_window::find_all_anagram_positions(&args[0], &args[1])?
        ),
        Drill::MajorityElement => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            greedy::majority_element(&nums)?.to_string()
        }
        Drill::MaxProfit => {
            let prices: Vec<u32> = parse_list(drill, 0, &args[0])?;
            greedy::max_profit(&prices).to_string()
        }
        Drill::CanJump => {
            let jumps: Vec<usize> = parse_list(drill, 0, &args[0])?;
            greedy::can_jump(&jumps).to_string()
        }
        Drill::CanPlaceFlowers => {
            let mut bed: Vec<u8> = parse_list(drill, 0, &args[0])?;
            let n: usize = parse_scalar(drill, 1, &args[1])?;
            let placed = greedy::can_place_flowers(&mut bed, n);
            format!("{} {:?}", placed, bed)
        }
        Drill::ClimbingStairs => {
            let n: u32 = parse_scalar(drill, 0, &args[0])?;
            dp::climbing_stairs(n)?.to_string()
        }
        Drill::Rob => {
            let values: Vec<u32> = parse_list(drill, 0, &args[0])?;
            dp::rob(&values).to_string()
        }
        Drill::MaxSubArray => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            dp::max_sub_array(&nums).map_or_else(|| "none".to_string(), |best| best.to_string())
        }
        Drill::MaxSubArrayWindow => {
            let nums: Vec<i32> = parse_list(drill, 0, &args[0])?;
            match dp::max_sub_array_window(&nums) {
                Some((best, window)) => format!("{} [{}, {})", best, window.start, window.end),
                None => "none".to_string(),
            }
        }
        Drill::CoinChange => {
            let coins: Vec<u32> = parse_list(drill, 0, &args[0])?;
            let amount: u32 = parse_scalar(drill, 1, &args[1])?;
            ensure_table_len(drill, u64::from(amount) + 1)?;
            render_index(dp::coin_change(&coins, amount))
        }
        Drill::CanPartition => {
            let values: Vec<u32> = parse_list(drill, 0, &args[0])?;
            let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
            if total % 2 == 0 {
                ensure_table_len(drill, total / 2 + 1)?;
            }
            dp::can_partition(&values).to_string()
        }
        Drill::NumDecodings => dp::num_decodings(&args[0])?.to_string(),
    };

    Ok(rendered)
}

// =============================================================================
// Batch evaluation
// =============================================================================

/// Options for batch evaluation
#[derive(Clone)]
pub struct BatchOptions<F = fn(u32, u32)> {
    /// Minimum number of cases handed to one rayon task (default: 1)
    pub min_cases_per_task: usize,
    /// Progress callback (current, total)
    pub on_progress: Option<F>,
}

impl Default for BatchOptions<fn(u32, u32)> {
    fn default() -> Self {
        Self {
            min_cases_per_task: 1,
            on_progress: None,
        }
    }
}

impl<F> BatchOptions<F> {
    /// Set the minimum number of cases per rayon task
    pub fn with_min_cases_per_task(mut self, min: usize) -> Self {
        self.min_cases_per_task = min.max(1);
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> BatchOptions<G> {
        BatchOptions {
            min_cases_per_task: self.min_cases_per_task,
            on_progress: Some(callback),
        }
    }
}

/// Evaluate every case in order on the current thread
pub fn run_batch(cases: &[Case]) -> Vec<Result<String, CaseError>> {
    cases.iter().map(run_case).collect()
}

/// Evaluate cases in parallel using rayon
///
/// Results are returned in input order and are identical to [`run_batch`].
pub fn run_batch_parallel<F>(
    cases: &[Case],
    options: BatchOptions<F>,
) -> Vec<Result<String, CaseError>>
where
    F: Fn(u32, u32) + Sync,
{
    let BatchOptions {
        min_cases_per_task,
        on_progress,
    } = options;

    let total = cases.len() as u32;
    let progress = AtomicU32::new(0);

    let results = cases
        .par_iter()
        .with_min_len(min_cases_per_task)
        .map(|case| {
            let result = run_case(case);
            if let Some(ref callback) = on_progress {
                let count = progress.fetch_add(1, Ordering::Relaxed) + 1;
                if count % PROGRESS_INTERVAL == 0 {
                    callback(count, total);
                }
            }
            result
        })
        .collect();

    // The loop already reported completion when total lands on an interval
    if let Some(ref callback) = on_progress
        && (total == 0 || total % PROGRESS_INTERVAL != 0)
    {
        callback(total, total);
    }
    results
}
