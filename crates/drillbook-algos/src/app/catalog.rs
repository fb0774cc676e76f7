//! Drill catalog
//!
//! Names every domain routine, groups it by technique and parses the text
//! arguments used by case files and the command line.

use crate::constants::LIST_SEPARATOR;
use crate::domain::error::AlgoError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Technique group a drill belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Technique {
    Hashing,
    TwoPointer,
    SlidingWindow,
    Greedy,
    DynamicProgramming,
}

impl Technique {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hashing => "hashing",
            Self::TwoPointer => "two-pointer",
            Self::SlidingWindow => "sliding-window",
            Self::Greedy => "greedy",
            Self::DynamicProgramming => "dynamic-programming",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every routine that can be run from text arguments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Drill {
    // Hashing / frequency
    ContainsDuplicate,
    IsAnagram,
    TopKFrequent,
    RansomNote,
    FirstUniqueChar,
    TwoSum,
    // Two pointers
    IsPalindromeLowercase,
    IsPalindromeAlphanumeric,
    RemoveDuplicatesSorted,
    MoveZeroes,
    SortedSquares,
    TwoSumSorted,
    ReverseString,
    // Sliding window
    LongestSubstringWithoutRepeats,
    FindAllAnagramPositions,
    // Greedy
    MajorityElement,
    MaxProfit,
    CanJump,
    CanPlaceFlowers,
    // Dynamic programming
    ClimbingStairs,
    Rob,
    MaxSubArray,
    MaxSubArrayWindow,
    CoinChange,
    CanPartition,
    NumDecodings,
}

impl Drill {
    /// All drills, grouped by technique
    pub const ALL: [Drill; 26] = [
        Self::ContainsDuplicate,
        Self::IsAnagram,
        Self::TopKFrequent,
        Self::RansomNote,
        Self::FirstUniqueChar,
        Self::TwoSum,
        Self::IsPalindromeLowercase,
        Self::IsPalindromeAlphanumeric,
        Self::RemoveDuplicatesSorted,
        Self::MoveZeroes,
        Self::SortedSquares,
        Self::TwoSumSorted,
        Self::ReverseString,
        Self::LongestSubstringWithoutRepeats,
        Self::FindAllAnagramPositions,
        Self::MajorityElement,
        Self::MaxProfit,
        Self::CanJump,
        Self::CanPlaceFlowers,
        Self::ClimbingStairs,
        Self::Rob,
        Self::MaxSubArray,
        Self::MaxSubArrayWindow,
        Self::CoinChange,
        Self::CanPartition,
        Self::NumDecodings,
    ];

    /// Name used in case files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::ContainsDuplicate => "contains_duplicate",
            Self::IsAnagram => "is_anagram",
            Self::TopKFrequent => "top_k_frequent",
            Self::RansomNote => "ransom_note",
            Self::FirstUniqueChar => "first_unique_char",
            Self::TwoSum => "two_sum",
            Self::IsPalindromeLowercase => "is_palindrome_lowercase",
            Self::IsPalindromeAlphanumeric => "is_palindrome_alphanumeric",
            Self::RemoveDuplicatesSorted => "remove_duplicates_sorted",
            Self::MoveZeroes => "move_zeroes",
            Self::SortedSquares => "sorted_squares",
            Self::TwoSumSorted => "two_sum_sorted",
            Self::ReverseString => "reverse_string",
            Self::LongestSubstringWithoutRepeats => "longest_substring_without_repeats",
            Self::FindAllAnagramPositions => "find_all_anagram_positions",
            Self::MajorityElement => "majority_element",
            Self::MaxProfit => "max_profit",
            Self::CanJump => "can_jump",
            Self::CanPlaceFlowers => "can_place_flowers",
            Self::ClimbingStairs => "climbing_stairs",
            Self::Rob => "rob",
            Self::MaxSubArray => "max_sub_array",
            Self::MaxSubArrayWindow => "max_sub_array_window",
            Self::CoinChange => "coin_change",
            Self::CanPartition => "can_partition",
            Self::NumDecodings => "num_decodings",
        }
    }

    pub fn technique(self) -> Technique {
        match self {
            Self::ContainsDuplicate
            | Self::IsAnagram
            | Self::TopKFrequent
            | Self::RansomNote
            | Self::FirstUniqueChar
            | Self::TwoSum => Technique::Hashing,
            Self::IsPalindromeLowercase
            | Self::IsPalindromeAlphanumeric
            | Self::RemoveDuplicatesSorted
            | Self::MoveZeroes
            | Self::SortedSquares
            | Self::TwoSumSorted
            | Self::ReverseString => Technique::TwoPointer,
            Self::LongestSubstringWithoutRepeats | Self::FindAllAnagramPositions => {
                Technique::SlidingWindow
            }
            Self::MajorityElement | Self::MaxProfit | Self::CanJump | Self::CanPlaceFlowers => {
                Technique::Greedy
            }
            Self::ClimbingStairs
            | Self::Rob
            | Self::MaxSubArray
            | Self::MaxSubArrayWindow
            | Self::CoinChange
            | Self::CanPartition
            | Self::NumDecodings => Technique::DynamicProgramming,
        }
    }

    /// Human-readable argument list, e.g. `<nums> <k>`
    pub fn usage(self) -> &'static str {
        match self {
            Self::ContainsDuplicate
            | Self::RemoveDuplicatesSorted
            | Self::MoveZeroes
            | Self::SortedSquares
            | Self::MajorityElement
            | Self::MaxSubArray
            | Self::MaxSubArrayWindow => "<nums>",
            Self::IsAnagram => "<s> <t>",
            Self::TopKFrequent => "<nums> <k>",
            Self::RansomNote => "<note> <magazine>",
            Self::TwoSum | Self::TwoSumSorted => "<nums> <target>",
            Self::FirstUniqueChar
            | Self::IsPalindromeLowercase
            | Self::IsPalindromeAlphanumeric
            | Self::ReverseString
            | Self::LongestSubstringWithoutRepeats
            | Self::NumDecodings => "<s>",
            Self::FindAllAnagramPositions => "<s> <p>",
            Self::MaxProfit => "<prices>",
            Self::CanJump => "<jumps>",
            Self::CanPlaceFlowers => "<bed> <n>",
            Self::ClimbingStairs => "<n>",
            Self::Rob | Self::CanPartition => "<values>",
            Self::CoinChange => "<coins> <amount>",
        }
    }

    /// Number of arguments the drill takes
    pub fn arity(self) -> usize {
        self.usage().split_whitespace().count()
    }
}

impl fmt::Display for Drill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Drill {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|drill| drill.name() == s)
            .ok_or_else(|| CaseError::UnknownDrill(s.to_string()))
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while building or running a case
#[derive(Debug, Error)]
pub enum CaseError {
    /// Drill name not in the catalog
    #[error("Unknown drill: {0}")]
    UnknownDrill(String),

    /// Wrong number of arguments for the drill
    #[error("{drill} expects {expected} argument(s), found {found}")]
    ArgumentCount {
        drill: Drill,
        expected: usize,
        found: usize,
    },

    /// Argument text could not be parsed
    #[error("Invalid argument {index} for {drill}: {value:?}")]
    InvalidArgument {
        drill: Drill,
        index: usize,
        value: String,
    },

    /// Argument would need a DP table beyond the configured limit
    #[error("{drill} needs a table of {required} entries (limit {limit})")]
    TableTooLarge {
        drill: Drill,
        required: u64,
        limit: u64,
    },

    /// The routine rejected its input
    #[error(transparent)]
    Algo(#[from] AlgoError),

    /// Case file line could not be parsed
    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        source: Box<CaseError>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Argument parsing
// =============================================================================

/// Parse a single scalar argument
pub fn parse_scalar<T: FromStr>(drill: Drill, index: usize, field: &str) -> Result<T, CaseError> {
    field.trim().parse().map_err(|_| CaseError::InvalidArgument {
        drill,
        index,
        value: field.to_string(),
    })
}

/// Parse a comma-separated list argument
///
/// Surrounding brackets are optional; an empty field or `[]` is an empty list.
pub fn parse_list<T: FromStr>(
    drill: Drill,
    index: usize,
    field: &str,
) -> Result<Vec<T>, CaseError> {
    let trimmed = field.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed)
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(LIST_SEPARATOR)
        .map(|item| {
            item.trim().parse().map_err(|_| CaseError::InvalidArgument {
                drill,
                index,
                value: field.to_string(),
            })
        })
        .collect()
}
