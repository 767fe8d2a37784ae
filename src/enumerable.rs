use crate::cursor::Cursor;
use crate::cursors::{IterCursor, RangeArgs, RangeCursor, TryIterCursor};
use std::iter::FusedIterator;

/// A lazy, single-pass sequence owning exactly one cursor
///
/// Transformations such as [`filter`](Enumerable::filter) and
/// [`map`](Enumerable::map) move the cursor into a new stage and never pull.
/// Terminal operations such as [`to_vec`](Enumerable::to_vec) drive the chain;
/// once they have consumed elements, those elements are gone for good and a
/// drained sequence keeps reporting the empty result.
#[derive(Debug)]
pub struct Enumerable<C> {
    cursor: C,
}

impl<C> Enumerable<C> {
    /// Wrap an existing cursor
    pub fn new(cursor: C) -> Self {
        Enumerable { cursor }
    }

    /// Consume the sequence and return its cursor
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Enumerable<C> {
    /// Pull the next element through the whole chain
    pub fn pull(&mut self) -> Result<Option<C::Element>, C::Error> {
        self.cursor.pull()
    }
}

impl<I: Iterator> Enumerable<IterCursor<I>> {
    /// Wrap any iterable; each pull delegates to its iterator
    ///
    /// ```
    /// use enumerable::Enumerable;
    ///
    /// let mut words = Enumerable::wrap(["a", "bb", "ccc"]).filter(|w| w.len() > 1);
    /// assert_eq!(words.to_vec().unwrap(), vec!["bb", "ccc"]);
    /// ```
    pub fn wrap<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Enumerable::new(IterCursor::new(source))
    }
}

impl<I: Iterator> Enumerable<TryIterCursor<I>> {
    /// Wrap an iterable of `Result`s
    ///
    /// The first `Err` reached by a terminal operation is returned from it as a
    /// [`SourceError`](crate::SourceError).
    pub fn try_wrap<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Enumerable::new(TryIterCursor::new(source))
    }
}

impl Enumerable<RangeCursor> {
    /// Sequence of consecutive integers
    ///
    /// `range(n)` counts from zero and is the same as `range((0, n))`;
    /// `range((start, count))` yields `start..start + count`. A negative count
    /// yields nothing.
    ///
    /// ```
    /// use enumerable::Enumerable;
    ///
    /// assert_eq!(Enumerable::range(3).to_vec().unwrap(), vec![0, 1, 2]);
    /// assert_eq!(Enumerable::range((3, 2)).to_vec().unwrap(), vec![3, 4]);
    /// ```
    pub fn range(args: impl RangeArgs) -> Self {
        Enumerable::new(RangeCursor::from_args(args))
    }
}

impl<C: Cursor> IntoIterator for Enumerable<C> {
    type Item = Result<C::Element, C::Error>;
    type IntoIter = IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            cursor: self.cursor,
            done: false,
        }
    }
}

/// Iterator over the remaining elements of an [`Enumerable`]
///
/// Ends after the cursor is exhausted or after yielding the first error.
#[derive(Debug)]
pub struct IntoIter<C> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> Iterator for IntoIter<C> {
    type Item = Result<C::Element, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.cursor.pull() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<C: Cursor> FusedIterator for IntoIter<C> {}
