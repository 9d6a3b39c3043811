use crate::foundation::error::{PtanimError, PtanimResult};

/// Half-open integer range `[begin, end)` walked with a fixed stride toward `end`.
///
/// The stride sign is derived from the bounds, so descending ranges work with a positive step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRange {
    begin: i64,
    end: i64,
    step: i64,
}

impl StepRange {
    /// Build a range from possibly fractional inputs.
    ///
    /// Bounds and step are truncated toward zero. Equal bounds give an empty range. A zero step
    /// with distinct bounds is rejected as [`PtanimError::DegenerateRange`].
    pub fn new(begin: f64, end: f64, step: f64) -> PtanimResult<Self> {
        for (label, v) in [("begin", begin), ("end", end), ("step", step)] {
            if !v.is_finite() {
                return Err(PtanimError::validation(format!(
                    "range {label} must be finite, got {v}"
                )));
            }
        }
        Self::from_ints(begin.trunc() as i64, end.trunc() as i64, step.trunc() as i64)
    }

    /// Build a range from integer inputs. See [`StepRange::new`].
    pub fn from_ints(begin: i64, end: i64, step: i64) -> PtanimResult<Self> {
        let magnitude = step.checked_abs().ok_or_else(|| {
            PtanimError::validation(format!("range step {step} is out of bounds"))
        })?;
        let step = if end < begin { -magnitude } else { magnitude };
        if step == 0 && begin != end {
            return Err(PtanimError::DegenerateRange { begin, end });
        }
        Ok(Self { begin, end, step })
    }

    /// Inclusive start.
    pub fn begin(self) -> i64 {
        self.begin
    }

    /// Exclusive end.
    pub fn end(self) -> i64 {
        self.end
    }

    /// Signed stride.
    pub fn step(self) -> i64 {
        self.step
    }

    /// Number of values produced.
    pub fn len(self) -> usize {
        if self.begin == self.end {
            return 0;
        }
        let span = self.end.abs_diff(self.begin);
        let stride = self.step.unsigned_abs();
        span.div_ceil(stride) as usize
    }

    /// Return `true` when the range yields nothing.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Iterate the values in order. The range can be iterated any number of times.
    pub fn iter(self) -> StepIter {
        StepIter {
            range: self,
            index: 0,
        }
    }

    /// Collect all values.
    pub fn to_vec(self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl IntoIterator for StepRange {
    type Item = i64;
    type IntoIter = StepIter;

    fn into_iter(self) -> StepIter {
        self.iter()
    }
}

/// Iterator over a [`StepRange`].
#[derive(Clone, Debug)]
pub struct StepIter {
    range: StepRange,
    index: usize,
}

impl Iterator for StepIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.index >= self.range.len() {
            return None;
        }
        let v = self.range.begin + (self.index as i64) * self.range.step;
        self.index += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for StepIter {}

#[cfg(test)]
#[path = "../../tests/unit/steps/range.rs"]
mod tests;
