use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::policy::{Always, Identity, Skipped};
use crate::stage::Stage;

/// Stage dropping a fixed number of leading elements
pub type Skip<C> = Stage<C, Always, Skipped, Identity>;

impl<C: Cursor> Enumerable<C> {
    /// Drop the first `count` elements and produce the rest
    pub fn skip(self, count: usize) -> Enumerable<Skip<C>> {
        Enumerable::new(Stage::new(
            self.into_cursor(),
            Always,
            Skipped::new(count),
            Identity,
        ))
    }
}

/// Convenience function to create a sequence without its first `count` elements
pub fn skip<C: Cursor>(sequence: Enumerable<C>, count: usize) -> Enumerable<Skip<C>> {
    sequence.skip(count)
}
