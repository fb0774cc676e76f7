//! Sliding-window utilities
//!
//! A window `[left, right)` moves forward over the input with both ends only
//! ever advancing, so each symbol enters and leaves the window at most once.

use crate::domain::HashSet;
use crate::domain::error::AlgoError;
use crate::domain::frequency::{LetterCounts, letter_slot};

/// Length (in characters) of the longest substring with no repeated character
///
/// The window keeps a set of the characters it contains. When the incoming
/// character is already inside, the window shrinks from the left until the
/// earlier copy is gone. Works on any `char`.
pub fn longest_substring_without_repeats(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut window: HashSet<char> = HashSet::default();
    let mut left = 0;
    let mut best = 0;

    for right in 0..chars.len() {
        while window.contains(&chars[right]) {
            window.remove(&chars[left]);
            left += 1;
        }
        window.insert(chars[right]);
        best = best.max(right + 1 - left);
    }

    best
}

/// Start offsets of every substring of `s` that is an anagram of `p`
///
/// Uses a fixed-width window of `p.len()` letters and a running letter
/// counter: each shift removes the outgoing letter and adds the incoming one,
/// then compares the two 26-slot counters. O(n) total.
///
/// An empty `p`, or one longer than `s`, yields no positions.
pub fn find_all_anagram_positions(s: &str, p: &str) -> Result<Vec<usize>, AlgoError> {
    let target = LetterCounts::from_letters(p)?;
    let slots = s
        .char_indices()
        .map(|(position, symbol)| letter_slot(symbol, position))
        .collect::<Result<Vec<_>, _>>()?;

    let width = target.total();
    let mut positions = Vec::new();
    if width == 0 || width > slots.len() {
        return Ok(positions);
    }

    let mut window = LetterCounts::new();
    for &slot in &slots[..width] {
        window.add(slot);
    }
    if window == target {
        positions.push(0);
    }

    for incoming in width..slots.len() {
        window.remove(slots[incoming - width]);
        window.add(slots[incoming]);
        if window == target {
            positions.push(incoming - width + 1);
        }
    }

    Ok(positions)
}
