use crate::cursor::Cursor;
use crate::error::SourceError;
use std::error::Error;
use std::iter::Fuse;

/// Cursor over an iterator of `Result`s
///
/// `Ok` items are produced as elements. An `Err` item is reported as a
/// [`SourceError`] carrying the index of the failing pull. After a failure the
/// cursor keeps delegating to the iterator; callers are expected to discard it.
#[derive(Debug, Clone)]
pub struct TryIterCursor<I> {
    iter: Fuse<I>,
    position: usize,
}

impl<I> TryIterCursor<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
        I: Iterator,
    {
        TryIterCursor {
            iter: source.into_iter().fuse(),
            position: 0,
        }
    }

    /// Number of pulls that produced an element or an error so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<I, T, E> Cursor for TryIterCursor<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: Error + 'static,
{
    type Element = T;
    type Error = SourceError<E>;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        match self.iter.next() {
            Some(Ok(value)) => {
                self.position += 1;
                Ok(Some(value))
            }
            Some(Err(error)) => {
                let position = self.position;
                self.position += 1;
                Err(SourceError::new(position, error))
            }
            None => Ok(None),
        }
    }
}
