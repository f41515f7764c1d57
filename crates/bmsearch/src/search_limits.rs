//! Limits and defaults for the scan loop.
//!
//! All magic numbers that control search behavior are collected here.

// ===== Shift table =====

/// Smallest value a shift table entry may hold.
/// Entries are computed as `max(MIN_SHIFT, m - i - 1)`.
pub const MIN_SHIFT: usize = 1;

// ===== Result encoding =====

/// Sentinel returned by the integer form of a search when nothing was found.
pub const NOT_FOUND_INDEX: isize = -1;
