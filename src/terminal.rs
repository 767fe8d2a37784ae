//! Terminal operations: the only operations that pull
//!
//! Every terminal operation takes `&mut self` and leaves the sequence
//! partially or fully consumed. Calling another terminal operation afterwards
//! continues from wherever the previous one stopped, so a drained sequence
//! yields the empty or identity result. The first source fault stops the
//! operation and is returned as the error.

use crate::cursor::Cursor;
use crate::enumerable::Enumerable;

impl<C: Cursor> Enumerable<C> {
    /// Collect all remaining elements in order
    pub fn to_vec(&mut self) -> Result<Vec<C::Element>, C::Error> {
        let mut items = Vec::new();
        while let Some(item) = self.pull()? {
            items.push(item);
        }
        Ok(items)
    }

    /// Number of remaining elements
    pub fn count(&mut self) -> Result<usize, C::Error> {
        self.reduce(|count, _| count + 1, 0)
    }

    /// Left fold of the remaining elements, starting from `initial`
    pub fn reduce<A, F>(&mut self, mut combine: F, initial: A) -> Result<A, C::Error>
    where
        F: FnMut(A, C::Element) -> A,
    {
        let mut accumulator = initial;
        while let Some(item) = self.pull()? {
            accumulator = combine(accumulator, item);
        }
        Ok(accumulator)
    }

    /// First remaining element matching `predicate`; stops pulling once found
    pub fn find<P>(&mut self, mut predicate: P) -> Result<Option<C::Element>, C::Error>
    where
        P: FnMut(&C::Element) -> bool,
    {
        while let Some(item) = self.pull()? {
            if predicate(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// First remaining element, or `None` when the sequence is exhausted
    pub fn first(&mut self) -> Result<Option<C::Element>, C::Error> {
        self.find(|_| true)
    }

    /// Whether any remaining element matches `predicate`; stops at the first match
    pub fn some<P>(&mut self, mut predicate: P) -> Result<bool, C::Error>
    where
        P: FnMut(&C::Element) -> bool,
    {
        while let Some(item) = self.pull()? {
            if predicate(&item) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every remaining element matches `predicate`
    ///
    /// Defined as the negation of [`some`](Enumerable::some) with the negated
    /// predicate, so it stops at the first counterexample and is true for an
    /// empty sequence.
    pub fn every<P>(&mut self, mut predicate: P) -> Result<bool, C::Error>
    where
        P: FnMut(&C::Element) -> bool,
    {
        let counterexample = self.some(|item| !predicate(item))?;
        Ok(!counterexample)
    }
}
