//! Dynamic-programming utilities
//!
//! All routines fill a 1-D table over `0..=n`, or roll it into a couple of
//! variables when only the last two entries are read.
//!
//! | Routine | Recurrence | Base case(s) |
//! |---|---|---|
//! | [`climbing_stairs`] | `dp[i] = dp[i-1] + dp[i-2]` | `dp[0] = dp[1] = 1` |
//! | [`rob`] | `dp[i] = max(dp[i-1], dp[i-2] + nums[i])` | `dp[0] = nums[0]` |
//! | [`max_sub_array`] | `cur = max(num, cur + num)` | `cur = best = nums[0]` |
//! | [`coin_change`] | `dp[i] = min(dp[i-c] + 1)` | `dp[0] = 0` |
//! | [`can_partition`] | `dp[i] \|= dp[i-num]`, `i` descending | `dp[0] = true` |
//! | [`num_decodings`] | `dp[i] = dp[i-1]? + dp[i-2]?` | `dp[0] = 1` |
//!
//! Counts are 64-bit and checked: a count that would leave the `u64` range
//! is reported as [`AlgoError::Overflow`].

use crate::constants::{MAX_TWO_DIGIT_CODE, MIN_TWO_DIGIT_CODE};
use crate::domain::error::AlgoError;
use std::ops::Range;

/// Number of distinct ways to climb `n` steps taking 1 or 2 at a time
///
/// `climbing_stairs(0) == 1` (the empty climb). Values above `n = 92`
/// exceed `u64`.
pub fn climbing_stairs(n: u32) -> Result<u64, AlgoError> {
    // (dp[i-2], dp[i-1])
    let (mut two_back, mut one_back) = (1u64, 1u64);

    for _ in 2..=n {
        let current = one_back.checked_add(two_back).ok_or(AlgoError::Overflow)?;
        two_back = one_back;
        one_back = current;
    }

    Ok(one_back)
}

/// Largest sum of non-adjacent house values
///
/// Returns 0 for an empty street.
pub fn rob(nums: &[u32]) -> u64 {
    let (mut two_back, mut one_back) = (0u64, 0u64);

    for &value in nums {
        let current = one_back.max(two_back + value as u64);
        two_back = one_back;
        one_back = current;
    }

    one_back
}

/// Largest sum of a non-empty contiguous subarray (Kadane)
///
/// Returns `None` for an empty slice. Sums are accumulated in 64 bits.
pub fn max_sub_array(nums: &[i32]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut current = first as i64;
    let mut best = current;

    for &value in rest {
        let value = value as i64;
        current = value.max(current + value);
        best = best.max(current);
    }

    Some(best)
}

/// Kadane's algorithm returning the best sum and a window `[l, r)` achieving it
///
/// When several windows achieve the best sum, the one ending earliest is
/// returned, extended as far left as the running sum allows.
pub fn max_sub_array_window(nums: &[i32]) -> Option<(i64, Range<usize>)> {
    let (&first, _) = nums.split_first()?;
    let mut current = first as i64;
    let mut current_start = 0;
    let mut best = current;
    let mut best_window = 0..1;

    for (i, &value) in nums.iter().enumerate().skip(1) {
        let value = value as i64;
        if current < 0 {
            current = value;
            current_start = i;
        } else {
            current += value;
        }

        if current > best {
            best = current;
            best_window = current_start..i + 1;
        }
    }

    Some((best, best_window))
}

/// Fewest coins summing to `amount`, or `None` if it cannot be made
///
/// Coins may be reused. Zero-valued coins are ignored. Unreachable totals are
/// `None` in the table rather than a sentinel count.
///
/// The table holds `amount + 1` entries, so memory grows with the value of
/// `amount`, not its bit length. Callers taking untrusted input should bound
/// it first (see [`crate::constants::MAX_DP_TABLE_LEN`]).
pub fn coin_change(coins: &[u32], amount: u32) -> Option<u32> {
    let amount = amount as usize;
    let mut dp: Vec<Option<u32>> = vec![None; amount + 1];
    dp[0] = Some(0);

    for total in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin == 0 || coin > total {
                continue;
            }
            if let Some(previous) = dp[total - coin] {
                let candidate = previous + 1;
                dp[total] = Some(dp[total].map_or(candidate, |best| best.min(candidate)));
            }
        }
    }

    dp[amount]
}

/// Check whether `nums` splits into two subsets with equal sums
///
/// Boolean 0/1 knapsack over reachable totals up to `sum / 2`; totals are
/// scanned downward per item so that no item is used twice. An odd total is
/// rejected before any table is built. The empty slice splits into two
/// empty subsets.
///
/// The table holds `sum / 2 + 1` flags, so memory grows with the total value
/// of `nums`. Callers taking untrusted input should bound it first.
pub fn can_partition(nums: &[u32]) -> bool {
    let total: u64 = nums.iter().map(|&n| n as u64).sum();
    if total % 2 == 1 {
        return false;
    }

    let target = (total / 2) as usize;
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;

    for &num in nums {
        let num = num as usize;
        if num > target {
            continue;
        }
        for sum in (num..=target).rev() {
            reachable[sum] |= reachable[sum - num];
        }
    }

    reachable[target]
}

/// Number of ways to decode a digit string where `1..=26` map to `A..=Z`
///
/// The empty string has one (empty) decoding. Any non-digit is rejected
/// with [`AlgoError::InvalidSymbol`].
pub fn num_decodings(s: &str) -> Result<u64, AlgoError> {
    let mut digits = Vec::with_capacity(s.len());
    for (position, symbol) in s.char_indices() {
        match symbol.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(AlgoError::InvalidSymbol { symbol, position }),
        }
    }

    let Some(&first) = digits.first() else {
        return Ok(1);
    };

    // (dp[i-2], dp[i-1])
    let (mut two_back, mut one_back) = (1u64, u64::from(first != 0));

    for i in 2..=digits.len() {
        let mut current = 0u64;
        if digits[i - 1] != 0 {
            current = one_back;
        }
        let pair = digits[i - 2] * 10 + digits[i - 1];
        if (MIN_TWO_DIGIT_CODE..=MAX_TWO_DIGIT_CODE).contains(&pair) {
            current = current.checked_add(two_back).ok_or(AlgoError::Overflow)?;
        }
        two_back = one_back;
        one_back = current;
    }

    Ok(one_back)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // climbing_stairs tests
    // =========================================================================

    #[test]
    fn test_climbing_stairs_small() {
        assert_eq!(climbing_stairs(0), Ok(1));
        assert_eq!(climbing_stairs(1), Ok(1));
        assert_eq!(climbing_stairs(2), Ok(2));
        assert_eq!(climbing_stairs(3), Ok(3));
        assert_eq!(climbing_stairs(5), Ok(8));
    }

    #[test]
    fn test_climbing_stairs_u64_limit() {
        assert_eq!(climbing_stairs(92), Ok(12_200_160_415_121_876_738));
        assert_eq!(climbing_stairs(93), Err(AlgoError::Overflow));
    }

    // =========================================================================
    // rob tests
    // =========================================================================

    #[test]
    fn test_rob() {
        assert_eq!(rob(&[1, 2, 3, 1]), 4);
        assert_eq!(rob(&[2, 7, 9, 3, 1]), 12);
        assert_eq!(rob(&[2, 1, 1, 2]), 4);
    }

    #[test]
    fn test_rob_edges() {
        assert_eq!(rob(&[]), 0);
        assert_eq!(rob(&[5]), 5);
        assert_eq!(rob(&[1, 9]), 9);
        assert_eq!(rob(&[u32::MAX, 0, u32::MAX]), 2 * u32::MAX as u64);
    }

    // =========================================================================
    // max_sub_array tests
    // =========================================================================

    #[test]
    fn test_max_sub_array() {
        assert_eq!(max_sub_array(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
        assert_eq!(max_sub_array(&[1, 2, -3, 4, -5, 6, 7, 8, 9]), Some(30));
        assert_eq!(max_sub_array(&[5, 4, -1, 7, 8]), Some(23));
    }

    #[test]
    fn test_max_sub_array_edges() {
        assert_eq!(max_sub_array(&[]), None);
        assert_eq!(max_sub_array(&[-1]), Some(-1));
        assert_eq!(max_sub_array(&[-3, -1, -2]), Some(-1));
        assert_eq!(
            max_sub_array(&[i32::MAX, i32::MAX]),
            Some(2 * i32::MAX as i64)
        );
    }

    #[test]
    fn test_max_sub_array_window() {
        assert_eq!(
            max_sub_array_window(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]),
            Some((6, 3..7))
        );
        assert_eq!(max_sub_array_window(&[-3, -1, -2]), Some((-1, 1..2)));
        assert_eq!(max_sub_array_window(&[]), None);
    }

    #[test]
    fn test_max_sub_array_window_matches_sum() {
        let nums = [1, 2, -3, 4, -5, 6, 7, 8, 9];
        let (best, window) = max_sub_array_window(&nums).unwrap();
        let sum: i64 = nums[window].iter().map(|&v| v as i64).sum();
        assert_eq!(best, sum);
        assert_eq!(Some(best), max_sub_array(&nums));
    }

    // =========================================================================
    // coin_change tests
    // =========================================================================

    #[test]
    fn test_coin_change() {
        assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
        assert_eq!(coin_change(&[2], 3), None);
        assert_eq!(coin_change(&[1], 0), Some(0));
        assert_eq!(coin_change(&[186, 419, 83, 408], 6249), Some(20));
    }

    #[test]
    fn test_coin_change_edges() {
        assert_eq!(coin_change(&[], 0), Some(0));
        assert_eq!(coin_change(&[], 7), None);
        assert_eq!(coin_change(&[0, 3], 6), Some(2));
        assert_eq!(coin_change(&[0], 1), None);
    }

    // =========================================================================
    // can_partition tests
    // =========================================================================

    #[test]
    fn test_can_partition() {
        assert!(can_partition(&[1, 5, 11, 5]));
        assert!(can_partition(&[2, 3, 4, 5]));
        assert!(!can_partition(&[1, 2, 3, 5]));
        assert!(!can_partition(&[1, 2, 5]));
    }

    #[test]
    fn test_can_partition_edges() {
        assert!(can_partition(&[]));
        assert!(!can_partition(&[1]));
        assert!(can_partition(&[0, 0]));
        assert!(!can_partition(&[100, 2]));
    }

    // =========================================================================
    // num_decodings tests
    // =========================================================================

    #[test]
    fn test_num_decodings() {
        assert_eq!(num_decodings("12"), Ok(2));
        assert_eq!(num_decodings("226"), Ok(3));
        assert_eq!(num_decodings("06"), Ok(0));
        assert_eq!(num_decodings("10"), Ok(1));
        assert_eq!(num_decodings("27"), Ok(1));
        assert_eq!(num_decodings("100"), Ok(0));
    }

    #[test]
    fn test_num_decodings_edges() {
        assert_eq!(num_decodings(""), Ok(1));
        assert_eq!(num_decodings("0"), Ok(0));
        assert_eq!(num_decodings("7"), Ok(1));
    }

    #[test]
    fn test_num_decodings_rejects_non_digits() {
        assert_eq!(
            num_decodings("12a"),
            Err(AlgoError::InvalidSymbol {
                symbol: 'a',
                position: 2
            })
        );
        // Non-ASCII digits are not codes
        assert!(num_decodings("1٣").is_err());
    }

    #[test]
    fn test_num_decodings_long_input_overflows() {
        // "11...1" of length n has fib(n+1) decodings
        let long = "1".repeat(200);
        assert_eq!(num_decodings(&long), Err(AlgoError::Overflow));
        let fits = "1".repeat(92);
        assert_eq!(num_decodings(&fits), climbing_stairs(92));
    }
}
