use std::error::Error;

/// Pull-based cursor over a sequence of elements
///
/// A cursor is a mutable, single-owner position in a sequence. Every call to
/// [`pull`](Cursor::pull) either produces the next element, reports that the
/// sequence is exhausted, or reports a fault raised by the underlying source.
///
/// Implementations must keep exhaustion idempotent: once `pull` has returned
/// `Ok(None)`, every later call returns `Ok(None)` as well.
pub trait Cursor {
    /// The type of elements this cursor produces
    type Element;

    /// Error type returned when the underlying source fails
    type Error: Error;

    /// Advance the cursor by one element
    ///
    /// Returns `Ok(Some(element))` while elements remain, `Ok(None)` once the
    /// sequence is exhausted.
    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Element = C::Element;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        (**self).pull()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        (**self).pull()
    }
}
