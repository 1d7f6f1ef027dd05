use core::ops::RangeInclusive;

/// Pause between two consecutive plays.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Range the repeat count is drawn from when none (or garbage) was given.
pub const RANDOM_COUNT_RANGE: RangeInclusive<u32> = 1..=100;

/// Diagnostic text Windows attaches to calls that did not fail.
pub const SUCCESS_SENTINEL: &str = "The operation completed successfully.";

/// Detail reported when the platform failed without saying why.
pub const UNKNOWN_ERROR: &str = "unknown error";
