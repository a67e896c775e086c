use log::trace;

use crate::{TextBuffer, TextError};

/// Which ends of a slice are kept.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SlicePolicy {
    /// Keep both `from` and `to`.
    Include,
    /// Keep `from`, drop `to`.
    #[default]
    IncludeExclude,
    /// Drop `from` (unless it equals `to`), keep `to`.
    ExcludeInclude,
    /// Drop both `from` and `to`.
    Exclude,
}

impl TextBuffer {
    /// Keeps only the characters between `from` and `to`, as selected by
    /// `policy`.
    ///
    /// Negative indices count from the end. Indices beyond either end are
    /// moved to the nearest valid position, and a range that ends up empty or
    /// entirely outside the buffer clears it. This form never fails; see
    /// [`try_slice`](Self::try_slice) for a checked variant.
    ///
    /// ```rust
    /// use textcraft::{SlicePolicy, TextBuffer};
    ///
    /// let mut text = TextBuffer::from("abcdef");
    /// text.slice(1, -2, SlicePolicy::Include);
    /// assert_eq!(text, "bcde");
    /// ```
    pub fn slice(&mut self, from: isize, to: isize, policy: SlicePolicy) -> &mut Self {
        let (from, to) = self.slice_bounds(from, to, policy);
        self.apply_slice(from, to)
    }

    /// Like [`slice`](Self::slice), but rejects bad ranges instead of
    /// clamping them.
    ///
    /// # Errors
    ///
    /// [`TextError::RangeViolation`] if the resolved `from` is greater than
    /// the resolved `to`, or if either index, after applying `policy`, lies
    /// outside `0..=len`. The buffer is unchanged on error.
    pub fn try_slice(
        &mut self,
        from: isize,
        to: isize,
        policy: SlicePolicy,
    ) -> Result<&mut Self, TextError> {
        let len = self.signed_len();
        let violation = |from, to| TextError::RangeViolation {
            from,
            to,
            len: self.len(),
        };

        let (resolved_from, resolved_to) = (self.resolve(from), self.resolve(to));
        if resolved_from > resolved_to {
            return Err(violation(resolved_from, resolved_to));
        }

        let (from, to) = self.slice_bounds(from, to, policy);
        if !(0..=len).contains(&from) || !(0..=len).contains(&to) {
            return Err(violation(from, to));
        }

        Ok(self.apply_slice(from, to))
    }

    /// Resolves negative indices and applies `policy`, yielding a half-open
    /// range that may still be out of bounds.
    fn slice_bounds(&self, from: isize, to: isize, policy: SlicePolicy) -> (isize, isize) {
        let (from, to) = (self.resolve(from), self.resolve(to));
        let (next_from, next_to) = (from.saturating_add(1), to.saturating_add(1));
        match policy {
            SlicePolicy::Include => (from, next_to),
            SlicePolicy::IncludeExclude => (from, to),
            SlicePolicy::ExcludeInclude if from == to => (from, next_to),
            SlicePolicy::ExcludeInclude => (next_from, next_to),
            SlicePolicy::Exclude => (next_from, to),
        }
    }

    fn apply_slice(&mut self, from: isize, to: isize) -> &mut Self {
        if from > to || to <= 0 || from >= self.signed_len() {
            trace!("slice: {from}..{to} is empty for length {}, clearing", self.len());
            return self.delete();
        }

        let start = self.clamp_index(from);
        let end = self.clamp_index(to);
        self.skip(start).take(end - start)
    }
}
