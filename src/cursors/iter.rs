use crate::cursor::Cursor;
use std::convert::Infallible;
use std::iter::Fuse;

/// Cursor that delegates each pull to a wrapped iterator
///
/// The iterator is fused on construction, so exhaustion stays idempotent even
/// when the source iterator would resume after returning `None`.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        IterCursor {
            iter: source.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Element = I::Item;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        Ok(self.iter.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Iterator that resumes after reporting exhaustion
    struct Flaky {
        calls: u32,
    }

    impl Iterator for Flaky {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                None
            } else {
                Some(self.calls)
            }
        }
    }

    #[test]
    fn test_pulls_in_order() {
        let mut cursor = IterCursor::new(vec!['a', 'b', 'c']);

        assert_eq!(cursor.pull().unwrap(), Some('a'));
        assert_eq!(cursor.pull().unwrap(), Some('b'));
        assert_eq!(cursor.pull().unwrap(), Some('c'));
        assert_eq!(cursor.pull().unwrap(), None);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = IterCursor::new(Vec::<u8>::new());
        assert_eq!(cursor.pull().unwrap(), None);
    }

    #[test]
    fn test_exhaustion_is_idempotent_for_unfused_source() {
        let mut cursor = IterCursor::new(Flaky { calls: 0 });

        assert_eq!(cursor.pull().unwrap(), Some(1));
        assert_eq!(cursor.pull().unwrap(), None);
        // Flaky would yield 3 here; the cursor must stay exhausted
        assert_eq!(cursor.pull().unwrap(), None);
        assert_eq!(cursor.pull().unwrap(), None);
    }

    #[test]
    fn test_infinite_source_is_pulled_lazily() {
        let mut cursor = IterCursor::new(0u64..);

        for expected in 0..100 {
            assert_eq!(cursor.pull().unwrap(), Some(expected));
        }
    }
}
