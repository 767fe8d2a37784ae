//! Cursors shared by the unit tests

use crate::cursor::Cursor;
use crate::cursors::IterCursor;
use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

/// Cursor recording how many times it has been pulled
pub(crate) struct CountingCursor<I> {
    inner: IterCursor<I>,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iterator> Cursor for CountingCursor<I> {
    type Element = I::Item;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.pull()
    }
}

/// Wrap `source` in a counting cursor, returning the cursor and its pull counter
pub(crate) fn counting<S>(source: S) -> (CountingCursor<S::IntoIter>, Rc<Cell<usize>>)
where
    S: IntoIterator,
{
    let pulls = Rc::new(Cell::new(0));
    let cursor = CountingCursor {
        inner: IterCursor::new(source),
        pulls: Rc::clone(&pulls),
    };
    (cursor, pulls)
}
