use std::error::Error;
use std::fmt;

/// Failure raised by a fallible source, tagged with where in the sequence it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError<E> {
    /// Zero-based index of the pull that failed
    position: usize,
    inner: E,
}

impl<E> SourceError<E> {
    pub fn new(position: usize, inner: E) -> Self {
        SourceError { position, inner }
    }

    /// Returns the index of the pull that failed
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Consume the error and return the source's own error value
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: fmt::Display> fmt::Display for SourceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source failed at element {}: {}",
            self.position, self.inner
        )
    }
}

impl<E: Error + 'static> Error for SourceError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}
