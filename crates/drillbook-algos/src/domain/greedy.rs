//! Greedy and one-pass utilities

use crate::domain::error::AlgoError;

/// Element occurring more than `n / 2` times (Boyer–Moore voting)
///
/// The vote keeps a `(candidate, count)` pair in O(1) space. A second pass
/// confirms the candidate, so inputs without a true majority (including the
/// empty slice) return [`AlgoError::NoMajority`] instead of an arbitrary value.
pub fn majority_element(nums: &[i32]) -> Result<i32, AlgoError> {
    let mut candidate = 0;
    let mut count = 0usize;

    for &value in nums {
        if count == 0 {
            candidate = value;
        }
        if value == candidate {
            count += 1;
        } else {
            count -= 1;
        }
    }

    let occurrences = nums.iter().filter(|&&value| value == candidate).count();
    if occurrences > nums.len() / 2 {
        Ok(candidate)
    } else {
        Err(AlgoError::NoMajority)
    }
}

/// Best profit from one buy followed by one later sell
///
/// Returns 0 when no profitable pair exists (including fewer than two prices).
pub fn max_profit(prices: &[u32]) -> u32 {
    let mut min_so_far = u32::MAX;
    let mut best = 0;

    for &price in prices {
        min_so_far = min_so_far.min(price);
        best = best.max(price - min_so_far);
    }

    best
}

/// Check whether the last index is reachable from index 0
///
/// `nums[i]` is the maximum jump length from `i`. An empty slice has nothing
/// to reach and returns `true`.
pub fn can_jump(nums: &[usize]) -> bool {
    let mut farthest = 0usize;

    for (i, &jump) in nums.iter().enumerate() {
        if i > farthest {
            return false;
        }
        farthest = farthest.max(i.saturating_add(jump));
    }

    true
}

/// Plant `n` flowers in `bed` without any two being adjacent
///
/// `bed[i] == 0` is an empty plot, anything else is planted. Plots are
/// planted left to right as soon as both neighbours (or the boundary) are
/// empty, and the write is visible to the next check. Returns `true` as soon
/// as `n` flowers are placed; the bed is left with the flowers planted so far.
pub fn can_place_flowers(bed: &mut [u8], n: usize) -> bool {
    if n == 0 {
        return true;
    }

    let mut planted = 0;
    for i in 0..bed.len() {
        let left_empty = i == 0 || bed[i - 1] == 0;
        let right_empty = i + 1 == bed.len() || bed[i + 1] == 0;

        if bed[i] == 0 && left_empty && right_empty {
            bed[i] = 1;
            planted += 1;
            if planted == n {
                return true;
            }
        }
    }

    false
}
