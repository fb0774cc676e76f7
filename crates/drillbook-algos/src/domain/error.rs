//! Domain error definitions
//!
//! Precondition and domain violations that can be detected in linear time are
//! reported through [`AlgoError`] instead of producing an unspecified answer.

use thiserror::Error;

/// Errors returned by domain routines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// Symbol outside the alphabet accepted by the routine
    #[error("Invalid symbol {symbol:?} at byte offset {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Input required to be sorted non-decreasing is not
    #[error("Input is not sorted: element {position} is smaller than its predecessor")]
    NotSorted { position: usize },

    /// No element occurs more than n/2 times
    #[error("No majority element: no value occurs more than half the time")]
    NoMajority,

    /// No pair of elements sums to the target
    #[error("No solution: no pair sums to {target}")]
    NoSolution { target: i32 },

    /// A count exceeded the 64-bit range
    #[error("Arithmetic overflow: result does not fit in 64 bits")]
    Overflow,
}

/// Return `NotSorted` for the first element smaller than its predecessor
pub(crate) fn ensure_sorted(nums: &[i32]) -> Result<(), AlgoError> {
    match nums.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(AlgoError::NotSorted { position: i + 1 }),
        None => Ok(()),
    }
}
