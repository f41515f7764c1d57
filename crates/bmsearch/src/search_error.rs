/// Reasons a guarded search gives up before the scan reaches an outcome.
///
/// The plain `Matcher::search` never produces these; they only come out of
/// `Matcher::try_search` when its `SearchOption` asks for a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `max_steps` alignments were tried without finding or exhausting
    StepLimit { steps: usize, cursor: isize },
    /// The cursor can never make progress from here: it either slid by zero
    /// or came back to a position it already visited
    Stalled { cursor: isize },
}

impl SearchError {
    /// Cursor position at the moment the search gave up.
    pub fn cursor(&self) -> isize {
        match self {
            SearchError::StepLimit { cursor, .. } | SearchError::Stalled { cursor } => *cursor,
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::StepLimit { steps, cursor } => {
                write!(f, "step limit of {} reached at cursor {}", steps, cursor)
            }
            SearchError::Stalled { cursor } => write!(f, "scan stalled at cursor {}", cursor),
        }
    }
}

impl std::error::Error for SearchError {}

pub type SearchResult<T> = Result<T, SearchError>;
