use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::policy::{Always, Identity};
use crate::stage::Stage;

/// Stage producing elements until the first one that fails a predicate
pub type TakeWhile<C, P> = Stage<C, P, Always, Identity>;

impl<C: Cursor> Enumerable<C> {
    /// Produce elements while `predicate` holds, ending at the first failure
    ///
    /// The failing element is pulled but not produced; nothing after it is
    /// pulled.
    pub fn take_while<P>(self, predicate: P) -> Enumerable<TakeWhile<C, P>>
    where
        P: FnMut(&C::Element) -> bool,
    {
        Enumerable::new(Stage::new(self.into_cursor(), predicate, Always, Identity))
    }
}

/// Convenience function to create a conditionally truncated sequence
pub fn take_while<C, P>(sequence: Enumerable<C>, predicate: P) -> Enumerable<TakeWhile<C, P>>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    sequence.take_while(predicate)
}
