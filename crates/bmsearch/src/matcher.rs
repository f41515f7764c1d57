// Right-to-left scan driven by the shift table
//
// The cursor `i` marks the right edge of the current alignment window. Each
// step compares the pattern against the window from right to left, counting
// the matched suffix `j`, then slides the window using the shift of the text
// character one past the matched run (`text[i + j]`), not the mismatched one.
//
// The slide arithmetic is applied exactly, without clamping. A slide can be
// zero or negative, so a scan is not guaranteed to terminate:
// - pattern "a" over "ba": the default shift collapses to 0
// - pattern "aab" over "xabza": slides -1 then +1 forever
// `Matcher::try_search` runs the same loop under `SearchOption` guards.
//
// After a backward slide `i - j` and `i + j` can be negative. A negative
// position `p` reads `text[n + p]`, counting back from the end of the text.
// Positions below `-n` have no character: a comparison there is a mismatch
// and a shift lookup there falls back to the default. A full match whose
// window would start before the text cannot be reported as an offset, so it
// ends the scan as `StepOutcome::WrappedMatch` and the search reports
// `NotFound`.

use std::collections::HashSet;

use ahash::RandomState;
use log::{debug, trace, warn};

use crate::match_result::MatchResult;
use crate::search_error::{SearchError, SearchResult};
use crate::search_option::SearchOption;
use crate::shift_table::ShiftTable;

/// What happened at one alignment of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// The whole pattern matched; the window starts at this offset
    Found(usize),
    /// The matched run reached the end of the text
    Exhausted,
    /// Every pattern character matched, but the window starts at `start < 0`
    /// (its leftmost characters were read from the end of the text)
    WrappedMatch { start: isize },
    /// The window moved by `slide` (`slide_width` before subtracting the
    /// matched run). `probe` is the character the shift was looked up for,
    /// `None` if its position is below `-n`.
    Slide {
        probe: Option<char>,
        slide_width: usize,
        slide: isize,
    },
}

impl StepOutcome {
    /// The search result this outcome settles on, `None` if the scan goes on.
    #[inline]
    pub fn result(&self) -> Option<MatchResult> {
        match self {
            StepOutcome::Found(offset) => Some(MatchResult::Found(*offset)),
            StepOutcome::Exhausted | StepOutcome::WrappedMatch { .. } => {
                Some(MatchResult::NotFound)
            }
            StepOutcome::Slide { .. } => None,
        }
    }
}

/// One iteration of the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Right edge of the window this step compared
    pub cursor: isize,
    /// Length of the matched suffix
    pub matched: usize,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone)]
pub struct Matcher {
    text: Vec<char>,
    pattern: Vec<char>,
    table: ShiftTable,
    option: SearchOption,
}

impl Matcher {
    pub fn new(text: &str, pattern: &str) -> Self {
        Self::with_option(text, pattern, SearchOption::default())
    }

    pub fn with_option(text: &str, pattern: &str, option: SearchOption) -> Self {
        Self::from_chars(text.chars().collect(), pattern.chars().collect(), option)
    }

    pub fn from_chars(text: Vec<char>, pattern: Vec<char>, option: SearchOption) -> Self {
        let table = ShiftTable::build(&pattern);
        Self {
            text,
            pattern,
            table,
            option,
        }
    }

    #[inline]
    pub fn text(&self) -> &[char] {
        &self.text
    }

    #[inline]
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    #[inline]
    pub fn shift_table(&self) -> &ShiftTable {
        &self.table
    }

    #[inline]
    pub fn option(&self) -> &SearchOption {
        &self.option
    }

    /// Step through the scan one alignment at a time.
    pub fn scan(&self) -> Scan<'_> {
        Scan {
            matcher: self,
            cursor: self.pattern.len() as isize - 1,
            done: false,
        }
    }

    /// Run the scan to completion and report the first occurrence it reaches.
    ///
    /// No guards: for the inputs listed at the top of this module this never
    /// returns. Use `try_search` when the input is untrusted.
    pub fn search(&self) -> MatchResult {
        let result = self
            .scan()
            .find_map(|step| step.outcome.result())
            .unwrap_or(MatchResult::NotFound);
        debug!(
            "search: text len {}, pattern len {}: {}",
            self.text.len(),
            self.pattern.len(),
            result
        );
        result
    }

    /// `search` as a single integer, `-1` when nothing was found.
    pub fn search_index(&self) -> isize {
        self.search().to_index()
    }

    /// `search` under the matcher's `SearchOption`.
    pub fn try_search(&self) -> SearchResult<MatchResult> {
        let option = self.option;
        if option.is_unguarded() {
            return Ok(self.search());
        }

        let mut visited: HashSet<isize, RandomState> = HashSet::default();
        let mut steps = 0;
        let mut scan = self.scan();
        loop {
            let cursor = scan.cursor();
            if let Some(max_steps) = option.max_steps {
                if steps >= max_steps {
                    warn!("search gave up after {} steps at cursor {}", steps, cursor);
                    return Err(SearchError::StepLimit { steps, cursor });
                }
            }
            if option.detect_cycles && !visited.insert(cursor) {
                warn!("search stalled at cursor {} after {} steps", cursor, steps);
                return Err(SearchError::Stalled { cursor });
            }

            let Some(step) = scan.next() else {
                return Ok(MatchResult::NotFound);
            };
            steps += 1;
            if let Some(result) = step.outcome.result() {
                debug!("guarded search finished in {} steps: {}", steps, result);
                return Ok(result);
            }
        }
    }

    /// Text character at a signed position. Negative positions count back
    /// from the end of the text; anything still out of range has none.
    #[inline]
    fn char_at(&self, pos: isize) -> Option<char> {
        let pos = if pos < 0 {
            pos + self.text.len() as isize
        } else {
            pos
        };
        usize::try_from(pos)
            .ok()
            .and_then(|pos| self.text.get(pos).copied())
    }
}

/// Iterator over the steps of a scan. Ends after a step whose outcome settles
/// the result, or when the cursor moves past the end of the text.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    matcher: &'a Matcher,
    cursor: isize,
    done: bool,
}

impl Scan<'_> {
    /// Right edge of the window the next step will compare.
    #[inline]
    pub fn cursor(&self) -> isize {
        self.cursor
    }
}

impl Iterator for Scan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }

        let text = &self.matcher.text;
        let pattern = &self.matcher.pattern;
        let n = text.len() as isize;
        let m = pattern.len();
        let i = self.cursor;

        if i > n - 1 {
            self.done = true;
            return None;
        }

        let mut j = 0;
        while j < m && self.matcher.char_at(i - j as isize) == Some(pattern[m - j - 1]) {
            j += 1;
        }

        let outcome = if j == m {
            let start = i - m as isize + 1;
            match usize::try_from(start) {
                Ok(offset) => StepOutcome::Found(offset),
                Err(_) => StepOutcome::WrappedMatch { start },
            }
        } else if i + j as isize >= n {
            StepOutcome::Exhausted
        } else {
            let probe = self.matcher.char_at(i + j as isize);
            // m >= 1 here: an empty pattern always matches above
            let slide_width = probe
                .and_then(|c| self.matcher.table.shift_for(c))
                .unwrap_or(m - 1);
            let slide = if slide_width != j {
                slide_width as isize - j as isize
            } else {
                slide_width as isize
            };
            self.cursor += slide;
            StepOutcome::Slide {
                probe,
                slide_width,
                slide,
            }
        };

        if outcome.result().is_some() {
            self.done = true;
        }
        trace!("scan cursor {} matched {}: {:?}", i, j, outcome);

        Some(Step {
            cursor: i,
            matched: j,
            outcome,
        })
    }
}

impl std::iter::FusedIterator for Scan<'_> {}
