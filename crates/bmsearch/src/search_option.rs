/// Guards applied by `Matcher::try_search`.
///
/// The default leaves both guards off, so `try_search` behaves exactly like
/// `search` (and can spin forever on the same inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOption {
    /// Maximum number of alignments to try, `None` for unbounded
    pub max_steps: Option<usize>,
    /// Stop as soon as the cursor revisits a position or slides by zero.
    /// The next cursor depends only on the current one, so a revisit means
    /// the scan would loop forever.
    pub detect_cycles: bool,
}

impl SearchOption {
    /// Cycle detection on, no step budget. The cursor only ever takes values
    /// in a bounded range, so a scan that does not finish always revisits a
    /// cursor and this guard alone stops every input.
    pub fn guarded() -> Self {
        Self {
            max_steps: None,
            detect_cycles: true,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_cycle_detection(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }

    #[inline]
    pub fn is_unguarded(&self) -> bool {
        self.max_steps.is_none() && !self.detect_cycles
    }
}
