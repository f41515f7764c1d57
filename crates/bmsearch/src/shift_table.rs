// Per-character shift table
//
// Built once from the pattern, read-only afterwards. Keys are exactly the
// distinct characters of the pattern; a repeated character keeps the value of
// its rightmost occurrence because later writes overwrite earlier ones.

use std::collections::HashMap;

use ahash::RandomState;

use crate::search_limits::MIN_SHIFT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftTable {
    shifts: HashMap<char, usize, RandomState>,
}

impl ShiftTable {
    /// Build the table for `pattern`. An empty pattern yields an empty table.
    pub fn build(pattern: &[char]) -> Self {
        let m = pattern.len();
        let mut shifts = HashMap::with_capacity_and_hasher(m, RandomState::new());
        for (i, &c) in pattern.iter().enumerate() {
            shifts.insert(c, MIN_SHIFT.max(m - i - 1));
        }
        Self { shifts }
    }

    /// Shift stored for `c`, or `None` if `c` does not occur in the pattern.
    /// The caller decides what an absent character means.
    #[inline]
    pub fn shift_for(&self, c: char) -> Option<usize> {
        self.shifts.get(&c).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.shifts.iter().map(|(&c, &shift)| (c, shift))
    }
}

