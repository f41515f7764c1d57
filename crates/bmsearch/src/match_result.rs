use crate::search_limits::NOT_FOUND_INDEX;

/// Outcome of a search: the offset of the first occurrence the scan reached,
/// or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    /// 0-based char offset where the pattern starts in the text
    Found(usize),
    NotFound,
}

impl MatchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }

    #[inline]
    pub fn offset(&self) -> Option<usize> {
        match self {
            MatchResult::Found(offset) => Some(*offset),
            MatchResult::NotFound => None,
        }
    }

    /// Single-integer form: the offset, or `-1` when nothing was found.
    #[inline]
    pub fn to_index(&self) -> isize {
        match self {
            MatchResult::Found(offset) => *offset as isize,
            MatchResult::NotFound => NOT_FOUND_INDEX,
        }
    }
}

impl From<Option<usize>> for MatchResult {
    fn from(offset: Option<usize>) -> Self {
        match offset {
            Some(offset) => MatchResult::Found(offset),
            None => MatchResult::NotFound,
        }
    }
}

impl From<MatchResult> for Option<usize> {
    fn from(result: MatchResult) -> Self {
        result.offset()
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Found(offset) => write!(f, "found at {}", offset),
            MatchResult::NotFound => write!(f, "not found"),
        }
    }
}
