//! Drillbook constants
//!
//! Note: Algorithm-specific limits live next to the routines that use them.

// =============================================================================
// Fixed alphabet parameters
// =============================================================================

/// Number of symbols in the fixed lowercase alphabet (a..=z)
pub const ALPHABET_SIZE: usize = 26;

/// First symbol of the fixed alphabet, used as the counter index base
pub const ALPHABET_BASE: u8 = b'a';

// =============================================================================
// Decode-ways parameters
// =============================================================================

/// Smallest two-digit code that decodes to a letter ("10" = 'J')
pub const MIN_TWO_DIGIT_CODE: u8 = 10;

/// Largest two-digit code that decodes to a letter ("26" = 'Z')
pub const MAX_TWO_DIGIT_CODE: u8 = 26;

// =============================================================================
// Dynamic-programming limits
// =============================================================================

/// Largest DP table (entries) a case may request through the runner
///
/// Applies to `coin_change` (amount + 1) and `can_partition` (sum / 2 + 1).
pub const MAX_DP_TABLE_LEN: u64 = 1 << 24;

// =============================================================================
// Case file format
// =============================================================================

/// Field separator between drill name and arguments
pub const CASE_FIELD_SEPARATOR: char = '\t';

/// Separator between elements of an integer list argument
pub const LIST_SEPARATOR: char = ',';

/// Lines starting with this prefix are ignored
pub const COMMENT_PREFIX: char = '#';

/// Report every N cases when a progress callback is attached
pub const PROGRESS_INTERVAL: u32 = 1_000;
