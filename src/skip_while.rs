use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::policy::{Always, Identity, Not};
use crate::stage::Stage;

/// Stage dropping every element that satisfies a predicate
pub type SkipWhile<C, P> = Stage<C, Always, Not<P>, Identity>;

impl<C: Cursor> Enumerable<C> {
    /// Drop elements for which `predicate` holds
    ///
    /// The predicate is tested on every element, not only on a leading run:
    /// a matching element after the first non-matching one is dropped as well.
    ///
    /// ```
    /// use enumerable::Enumerable;
    ///
    /// let mut rest = Enumerable::wrap(vec![1, 2, 3, 1, 2, 3]).skip_while(|x| *x < 3);
    /// assert_eq!(rest.to_vec().unwrap(), vec![3, 3]);
    /// ```
    pub fn skip_while<P>(self, predicate: P) -> Enumerable<SkipWhile<C, P>>
    where
        P: FnMut(&C::Element) -> bool,
    {
        Enumerable::new(Stage::new(
            self.into_cursor(),
            Always,
            Not(predicate),
            Identity,
        ))
    }
}

/// Convenience function to create a sequence without the elements matching `predicate`
pub fn skip_while<C, P>(sequence: Enumerable<C>, predicate: P) -> Enumerable<SkipWhile<C, P>>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    sequence.skip_while(predicate)
}
