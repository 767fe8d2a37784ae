use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::policy::{Always, Identity};
use crate::stage::Stage;

/// Stage producing only the elements that satisfy a predicate
pub type Filter<C, P> = Stage<C, Always, P, Identity>;

impl<C: Cursor> Enumerable<C> {
    /// Keep the elements for which `predicate` returns true
    pub fn filter<P>(self, predicate: P) -> Enumerable<Filter<C, P>>
    where
        P: FnMut(&C::Element) -> bool,
    {
        Enumerable::new(Stage::new(self.into_cursor(), Always, predicate, Identity))
    }
}

/// Convenience function to create a filtered sequence
pub fn filter<C, P>(sequence: Enumerable<C>, predicate: P) -> Enumerable<Filter<C, P>>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    sequence.filter(predicate)
}
