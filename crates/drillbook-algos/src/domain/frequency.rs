//! Hashing and frequency utilities
//!
//! Routines in this module either build a bounded letter counter
//! ([`LetterCounts`], 26 slots keyed by `symbol - 'a'`) or a general hash
//! table, then decide membership, equality or ranking from it.
//!
//! Fixed-alphabet routines reject any symbol outside `a..=z` with
//! [`AlgoError::InvalidSymbol`]. Routines over integers accept any value.

use crate::constants::{ALPHABET_BASE, ALPHABET_SIZE};
use crate::domain::error::AlgoError;
use crate::domain::{HashMap, HashSet};
use std::hash::Hash;

// =============================================================================
// Bounded letter counter
// =============================================================================

/// Map a symbol to its counter slot, rejecting anything outside `a..=z`
///
/// `position` is the byte offset of the symbol, reported on error.
#[inline]
pub fn letter_slot(symbol: char, position: usize) -> Result<usize, AlgoError> {
    if symbol.is_ascii_lowercase() {
        Ok((symbol as u8 - ALPHABET_BASE) as usize)
    } else {
        Err(AlgoError::InvalidSymbol { symbol, position })
    }
}

/// Frequency table over the lowercase alphabet
///
/// Invariant: the sum of all slot counts equals `total()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
    total: usize,
}

impl LetterCounts {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every letter of `text`
    pub fn from_letters(text: &str) -> Result<Self, AlgoError> {
        let mut counts = Self::new();
        for (position, symbol) in text.char_indices() {
            counts.add(letter_slot(symbol, position)?);
        }
        Ok(counts)
    }

    /// Increment the count of a slot
    #[inline]
    pub fn add(&mut self, slot: usize) {
        self.counts[slot] += 1;
        self.total += 1;
    }

    /// Decrement the count of a slot
    ///
    /// Returns `false` (and leaves the counter untouched) if the slot is already zero.
    #[inline]
    pub fn remove(&mut self, slot: usize) -> bool {
        if self.counts[slot] == 0 {
            return false;
        }
        self.counts[slot] -= 1;
        self.total -= 1;
        true
    }

    /// Count for a letter (0 for symbols outside the alphabet)
    pub fn count(&self, symbol: char) -> u32 {
        letter_slot(symbol, 0).map_or(0, |slot| self.counts[slot])
    }

    /// Total number of letters counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check whether every letter count in `other` is available in `self`
    pub fn covers(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| have >= need)
    }
}

// =============================================================================
// Set / map based routines
// =============================================================================

/// Check whether any value appears at least twice
///
/// Exits on the first repeat. O(n) time, O(n) auxiliary set.
pub fn contains_duplicate<T: Eq + Hash>(nums: &[T]) -> bool {
    let mut seen = HashSet::with_capacity_and_hasher(nums.len(), Default::default());
    for value in nums {
        if !seen.insert(value) {
            return true;
        }
    }
    false
}

/// Return the `k` most frequent values, highest count first
///
/// Values are bucketed by count (buckets `0..=n`), then buckets are walked
/// from the highest count down. Values with equal counts keep the order of
/// their first occurrence in `nums`. If `k` exceeds the number of distinct
/// values, every distinct value is returned.
pub fn top_k_frequent(nums: &[i32], k: usize) -> Vec<i32> {
    let mut counts: HashMap<i32, usize> = HashMap::default();
    for &value in nums {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); nums.len() + 1];
    for &value in nums {
        // First occurrence moves the value into its bucket
        if let Some(count) = counts.remove(&value) {
            buckets[count].push(value);
        }
    }

    buckets.into_iter().rev().flatten().take(k).collect()
}

/// Find 0-based indices `[i, j]` (`i < j`) of two values summing to `target`
///
/// One pass with a value → index map. Sums are computed in 64 bits.
pub fn two_sum(nums: &[i32], target: i32) -> Result<[usize; 2], AlgoError> {
    let mut seen: HashMap<i64, usize> =
        HashMap::with_capacity_and_hasher(nums.len(), Default::default());

    for (j, &value) in nums.iter().enumerate() {
        let complement = target as i64 - value as i64;
        if let Some(&i) = seen.get(&complement) {
            return Ok([i, j]);
        }
        seen.entry(value as i64).or_insert(j);
    }

    Err(AlgoError::NoSolution { target })
}

// =============================================================================
// Fixed-alphabet routines
// =============================================================================

/// Check whether `t` is a rearrangement of `s`
///
/// Returns `Ok(false)` immediately when the lengths differ. Otherwise one
/// 26-slot balance is incremented for `s` and decremented for `t`; the
/// strings are anagrams iff every slot ends at zero.
///
/// Swapping the arguments preserves `Ok` answers and whether an error is
/// returned, but not the reported symbol: `s` is scanned first.
pub fn is_anagram(s: &str, t: &str) -> Result<bool, AlgoError> {
    if s.len() != t.len() {
        return Ok(false);
    }

    let mut balance = [0i32; ALPHABET_SIZE];
    for (position, symbol) in s.char_indices() {
        balance[letter_slot(symbol, position)?] += 1;
    }
    for (position, symbol) in t.char_indices() {
        balance[letter_slot(symbol, position)?] -= 1;
    }

    Ok(balance.iter().all(|&b| b == 0))
}

/// Check whether `note` can be written with the letters of `magazine`
pub fn ransom_note(note: &str, magazine: &str) -> Result<bool, AlgoError> {
    let available = LetterCounts::from_letters(magazine)?;
    let required = LetterCounts::from_letters(note)?;
    Ok(available.covers(&required))
}

/// Byte offset of the first letter that occurs exactly once
pub fn first_unique_char(s: &str) -> Result<Option<usize>, AlgoError> {
    let counts = LetterCounts::from_letters(s)?;
    Ok(s.char_indices()
        .find(|&(_, symbol)| counts.count(symbol) == 1)
        .map(|(position, _)| position))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // LetterCounts tests
    // =========================================================================

    #[test]
    fn test_letter_counts_total_matches_length() {
        let counts = LetterCounts::from_letters("abracadabra").unwrap();
        assert_eq!(counts.total(), 11);
        assert_eq!(counts.count('a'), 5);
        assert_eq!(counts.count('b'), 2);
        assert_eq!(counts.count('z'), 0);
    }

    #[test]
    fn test_letter_counts_rejects_uppercase() {
        let result = LetterCounts::from_letters("abC");
        assert_eq!(
            result,
            Err(AlgoError::InvalidSymbol {
                symbol: 'C',
                position: 2
            })
        );
    }

    #[test]
    fn test_letter_counts_remove_empty_slot() {
        let mut counts = LetterCounts::new();
        assert!(!counts.remove(0));
        counts.add(0);
        assert!(counts.remove(0));
        assert_eq!(counts.total(), 0);
        assert_eq!(counts, LetterCounts::new());
    }

    #[test]
    fn test_letter_counts_covers() {
        let big = LetterCounts::from_letters("aab").unwrap();
        let small = LetterCounts::from_letters("ab").unwrap();
        assert!(big.covers(&small));
        assert!(!small.covers(&big));
    }

    // =========================================================================
    // contains_duplicate tests
    // =========================================================================

    #[test]
    fn test_contains_duplicate() {
        assert!(contains_duplicate(&[1, 2, 3, 1]));
        assert!(!contains_duplicate(&[1, 2, 3, 4]));
        assert!(!contains_duplicate::<i32>(&[]));
        assert!(contains_duplicate(&["x", "y", "x"]));
    }

    // =========================================================================
    // is_anagram tests
    // =========================================================================

    #[test]
    fn test_is_anagram_basic() {
        assert_eq!(is_anagram("anagram", "nagaram"), Ok(true));
        assert_eq!(is_anagram("rat", "car"), Ok(false));
        assert_eq!(is_anagram("", ""), Ok(true));
    }

    #[test]
    fn test_is_anagram_length_mismatch_short_circuits() {
        // Length check happens before symbol validation
        assert_eq!(is_anagram("ab", "ABC"), Ok(false));
    }

    #[test]
    fn test_is_anagram_rejects_foreign_symbols() {
        assert!(matches!(
            is_anagram("a b", "ab "),
            Err(AlgoError::InvalidSymbol { symbol: ' ', .. })
        ));
        assert!(is_anagram("ab1", "1ab").is_err());
    }

    #[test]
    fn test_is_anagram_symmetric() {
        for (s, t) in [("listen", "silent"), ("abc", "abd"), ("aab", "abb")] {
            assert_eq!(is_anagram(s, t), is_anagram(t, s));
        }
    }

    #[test]
    fn test_is_anagram_swapped_error_reports_first_argument() {
        assert_eq!(
            is_anagram("a1", "1a"),
            Err(AlgoError::InvalidSymbol {
                symbol: '1',
                position: 1
            })
        );
        assert_eq!(
            is_anagram("1a", "a1"),
            Err(AlgoError::InvalidSymbol {
                symbol: '1',
                position: 0
            })
        );
    }

    // =========================================================================
    // top_k_frequent tests
    // =========================================================================

    #[test]
    fn test_top_k_frequent_basic() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[1], 1), vec![1]);
    }

    #[test]
    fn test_top_k_frequent_ties_keep_first_occurrence_order() {
        assert_eq!(top_k_frequent(&[4, 3, 3, 4, 9], 2), vec![4, 3]);
        assert_eq!(top_k_frequent(&[5, 6, 7], 3), vec![5, 6, 7]);
    }

    #[test]
    fn test_top_k_frequent_k_exceeds_distinct() {
        assert_eq!(top_k_frequent(&[2, 2, -1], 10), vec![2, -1]);
        assert!(top_k_frequent(&[], 3).is_empty());
        assert!(top_k_frequent(&[1, 2], 0).is_empty());
    }

    // =========================================================================
    // two_sum tests
    // =========================================================================

    #[test]
    fn test_two_sum() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Ok([0, 1]));
        assert_eq!(two_sum(&[3, 2, 4], 6), Ok([1, 2]));
        assert_eq!(two_sum(&[3, 3], 6), Ok([0, 1]));
    }

    #[test]
    fn test_two_sum_no_solution() {
        assert_eq!(two_sum(&[1, 2], 7), Err(AlgoError::NoSolution { target: 7 }));
        assert_eq!(two_sum(&[], 0), Err(AlgoError::NoSolution { target: 0 }));
    }

    #[test]
    fn test_two_sum_extreme_values() {
        assert_eq!(two_sum(&[i32::MAX, i32::MIN, -1], -1), Ok([0, 1]));
    }

    // =========================================================================
    // ransom_note / first_unique_char tests
    // =========================================================================

    #[test]
    fn test_ransom_note() {
        assert_eq!(ransom_note("a", "b"), Ok(false));
        assert_eq!(ransom_note("aa", "ab"), Ok(false));
        assert_eq!(ransom_note("aa", "aab"), Ok(true));
        assert_eq!(ransom_note("", ""), Ok(true));
        assert!(ransom_note("a!", "a!").is_err());
    }

    #[test]
    fn test_first_unique_char() {
        assert_eq!(first_unique_char("leetcode"), Ok(Some(0)));
        assert_eq!(first_unique_char("loveleetcode"), Ok(Some(2)));
        assert_eq!(first_unique_char("aabb"), Ok(None));
        assert_eq!(first_unique_char(""), Ok(None));
    }
}
