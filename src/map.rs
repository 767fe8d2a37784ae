use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::policy::Always;
use crate::stage::Stage;

/// Stage transforming every element with a mapping function
pub type Map<C, F> = Stage<C, Always, Always, F>;

impl<C: Cursor> Enumerable<C> {
    /// Transform each element with `mapper`
    pub fn map<F, R>(self, mapper: F) -> Enumerable<Map<C, F>>
    where
        F: FnMut(C::Element) -> R,
    {
        Enumerable::new(Stage::new(self.into_cursor(), Always, Always, mapper))
    }
}

/// Convenience function to create a mapped sequence
pub fn map<C, F, R>(sequence: Enumerable<C>, mapper: F) -> Enumerable<Map<C, F>>
where
    C: Cursor,
    F: FnMut(C::Element) -> R,
{
    sequence.map(mapper)
}
