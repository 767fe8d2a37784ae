use crate::cursor::Cursor;
use std::convert::Infallible;

/// Arguments accepted by [`Enumerable::range`](crate::Enumerable::range)
///
/// A bare integer is a count starting from zero, a pair is `(start, count)`.
pub trait RangeArgs {
    /// Resolve to `(start, count)`
    fn start_and_count(self) -> (i64, i64);
}

impl RangeArgs for i64 {
    fn start_and_count(self) -> (i64, i64) {
        (0, self)
    }
}

impl RangeArgs for i32 {
    fn start_and_count(self) -> (i64, i64) {
        (0, i64::from(self))
    }
}

impl RangeArgs for (i64, i64) {
    fn start_and_count(self) -> (i64, i64) {
        self
    }
}

impl RangeArgs for (i32, i32) {
    fn start_and_count(self) -> (i64, i64) {
        (i64::from(self.0), i64::from(self.1))
    }
}

/// Cursor yielding the half-open interval `[start, start + count)` in ascending order
///
/// A negative count produces an empty interval. The interval is cut short
/// after `i64::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCursor {
    next: i64,
    left: u64,
}

impl RangeCursor {
    pub fn new(start: i64, count: i64) -> Self {
        let requested = u64::try_from(count).unwrap_or(0);
        let representable = i64::MAX.abs_diff(start).saturating_add(1);
        RangeCursor {
            next: start,
            left: requested.min(representable),
        }
    }

    pub fn from_args(args: impl RangeArgs) -> Self {
        let (start, count) = args.start_and_count();
        RangeCursor::new(start, count)
    }

    /// Number of values not yet pulled
    pub fn remaining(&self) -> u64 {
        self.left
    }
}

impl Cursor for RangeCursor {
    type Element = i64;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        if self.left == 0 {
            return Ok(None);
        }

        let value = self.next;
        self.left -= 1;
        // `left` reaches zero before `next` could step past i64::MAX
        if self.left > 0 {
            self.next += 1;
        }
        Ok(Some(value))
    }
}
