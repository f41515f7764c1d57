// Single pattern substring search
// Right-to-left window comparison with a per-character shift table

#[cfg(test)]
mod test;

pub mod match_result;
pub mod matcher;
pub mod search_error;
pub mod search_limits;
pub mod search_option;
pub mod shift_table;

pub use match_result::MatchResult;
pub use matcher::{Matcher, Scan, Step, StepOutcome};
pub use search_error::{SearchError, SearchResult};
pub use search_option::SearchOption;
pub use shift_table::ShiftTable;

/// Find the first occurrence of `pattern` in `text` the scan reaches.
///
/// Unguarded, see `Matcher::search`.
pub fn find(text: &str, pattern: &str) -> MatchResult {
    Matcher::new(text, pattern).search()
}
