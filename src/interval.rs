use crate::error::{Error, Result};

/// A half-open time interval `[start, end)` on a sequence timeline, in seconds.
///
/// Invariant: `0 <= start < end`, both finite. The invariant is checked once at
/// construction and the fields are private, so an interval can never be
/// observed in a malformed state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    start: f64,
    end: f64,
}

impl TimeInterval {
    /// Create an interval, rejecting anything that violates `0 <= start < end`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::InvalidSegment {
                start,
                end,
                reason: "bounds must be finite",
            });
        }
        if start < 0.0 {
            return Err(Error::InvalidSegment {
                start,
                end,
                reason: "start is negative",
            });
        }
        if end <= start {
            return Err(Error::InvalidSegment {
                start,
                end,
                reason: "end is not after start",
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// The smallest interval covering both `self` and `other`.
    ///
    /// Intended for overlapping or touching neighbors while merging; for
    /// disjoint inputs it also covers the gap between them.
    pub fn merged_with(&self, other: &TimeInterval) -> TimeInterval {
        TimeInterval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_bounds() {
        assert!(TimeInterval::new(1.0, 1.0).is_err());
        assert!(TimeInterval::new(2.0, 1.0).is_err());
        assert!(TimeInterval::new(-0.5, 1.0).is_err());
        assert!(TimeInterval::new(f64::NAN, 1.0).is_err());
        assert!(TimeInterval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_valid_bounds() -> anyhow::Result<()> {
        let iv = TimeInterval::new(0.0, 2.5)?;
        assert_eq!(iv.start(), 0.0);
        assert_eq!(iv.end(), 2.5);
        assert_eq!(iv.duration(), 2.5);
        Ok(())
    }

    #[test]
    fn merged_with_spans_both() -> anyhow::Result<()> {
        let a = TimeInterval::new(1.0, 3.0)?;
        let b = TimeInterval::new(2.5, 5.0)?;
        let m = a.merged_with(&b);
        assert_eq!(m.start(), 1.0);
        assert_eq!(m.end(), 5.0);
        Ok(())
    }
}
