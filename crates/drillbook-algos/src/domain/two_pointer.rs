//! Two-pointer utilities
//!
//! Each routine keeps two indices into one sequence: either converging from
//! opposite ends, or a slow write index trailing a fast read index.
//! Routines with a sortedness precondition check it before touching the
//! input and report [`AlgoError::NotSorted`].

use crate::domain::error::{AlgoError, ensure_sorted};

// =============================================================================
// Palindromes
// =============================================================================

/// Palindrome check over lowercase letters only
///
/// Both pointers skip every byte outside `a..=z` (including uppercase letters
/// and the bytes of multi-byte characters). Comparison is case-sensitive.
pub fn is_palindrome_lowercase(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return true;
    }

    let (mut left, mut right) = (0, bytes.len() - 1);
    while left < right {
        if !bytes[left].is_ascii_lowercase() {
            left += 1;
        } else if !bytes[right].is_ascii_lowercase() {
            right -= 1;
        } else if bytes[left] != bytes[right] {
            return false;
        } else {
            left += 1;
            right -= 1;
        }
    }
    true
}

/// Palindrome check over ASCII letters and digits, ignoring case
///
/// Everything that is not ASCII alphanumeric is skipped.
pub fn is_palindrome_alphanumeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return true;
    }

    let (mut left, mut right) = (0, bytes.len() - 1);
    while left < right {
        if !bytes[left].is_ascii_alphanumeric() {
            left += 1;
        } else if !bytes[right].is_ascii_alphanumeric() {
            right -= 1;
        } else if !bytes[left].eq_ignore_ascii_case(&bytes[right]) {
            return false;
        } else {
            left += 1;
            right -= 1;
        }
    }
    true
}

// =============================================================================
// In-place rewrites
// =============================================================================

/// Compact the unique values of a sorted slice to its front
///
/// Returns the number of unique values. Elements at and beyond that count
/// are left in an unspecified order. The slice is not modified on error.
pub fn remove_duplicates_sorted(nums: &mut [i32]) -> Result<usize, AlgoError> {
    ensure_sorted(nums)?;
    if nums.is_empty() {
        return Ok(0);
    }

    // slow: last written unique slot
    let mut slow = 0;
    for fast in 1..nums.len() {
        if nums[fast] != nums[slow] {
            slow += 1;
            nums[slow] = nums[fast];
        }
    }
    Ok(slow + 1)
}

/// Move every zero to the end, keeping non-zero values in their original order
pub fn move_zeroes(nums: &mut [i32]) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums[write] = nums[read];
            write += 1;
        }
    }
    nums[write..].fill(0);
}

/// Reverse a character buffer in place
pub fn reverse_string(chars: &mut [char]) {
    if chars.len() < 2 {
        return;
    }

    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        chars.swap(left, right);
        left += 1;
        right -= 1;
    }
}

// =============================================================================
// Sorted-input routines
// =============================================================================

/// Squares of a sorted slice, in non-decreasing order
///
/// The largest remaining square is always at one of the two ends, so the
/// result is filled from the highest index downward.
pub fn sorted_squares(nums: &[i32]) -> Result<Vec<i64>, AlgoError> {
    ensure_sorted(nums)?;

    let mut result = vec![0i64; nums.len()];
    if nums.is_empty() {
        return Ok(result);
    }

    let (mut left, mut right) = (0, nums.len() - 1);
    for slot in (0..nums.len()).rev() {
        let (l, r) = (nums[left] as i64, nums[right] as i64);
        if l.abs() > r.abs() {
            result[slot] = l * l;
            left += 1;
        } else {
            result[slot] = r * r;
            // right can only hit zero on the final slot
            right = right.saturating_sub(1);
        }
    }
    Ok(result)
}

/// Find 1-based indices `[i, j]` (`i < j`) of two values summing to `target`
///
/// Requires a sorted slice. The right pointer moves left while the pair sum
/// is too large, the left pointer moves right while it is too small.
pub fn two_sum_sorted(nums: &[i32], target: i32) -> Result<[usize; 2], AlgoError> {
    ensure_sorted(nums)?;
    if nums.len() < 2 {
        return Err(AlgoError::NoSolution { target });
    }

    let (mut left, mut right) = (0, nums.len() - 1);
    while left < right {
        let sum = nums[left] as i64 + nums[right] as i64;
        match sum.cmp(&(target as i64)) {
            std::cmp::Ordering::Equal => return Ok([left + 1, right + 1]),
            std::cmp::Ordering::Greater => right -= 1,
            std::cmp::Ordering::Less => left += 1,
        }
    }

    Err(AlgoError::NoSolution { target })
}
