use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::policy::{Always, Counted, Identity};
use crate::stage::Stage;

/// Stage producing at most a fixed number of elements
pub type Take<C> = Stage<C, Counted, Always, Identity>;

impl<C: Cursor> Enumerable<C> {
    /// Produce at most `count` elements
    ///
    /// Never pulls more than `count` elements from upstream, so it is safe on
    /// unbounded sources.
    pub fn take(self, count: usize) -> Enumerable<Take<C>> {
        Enumerable::new(Stage::new(
            self.into_cursor(),
            Counted::new(count),
            Always,
            Identity,
        ))
    }
}

/// Convenience function to create a bounded sequence
pub fn take<C: Cursor>(sequence: Enumerable<C>, count: usize) -> Enumerable<Take<C>> {
    sequence.take(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::counting;

    #[test]
    fn test_take_from_infinite_source() {
        let (cursor, pulls) = counting(0..);
        let mut sequence = Enumerable::new(cursor).take(3);

        assert_eq!(sequence.to_vec().unwrap(), vec![0, 1, 2]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_take_more_than_available() {
        let mut sequence = Enumerable::range(2).take(10);
        assert_eq!(sequence.to_vec().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_take_zero_never_pulls() {
        let (cursor, pulls) = counting(0..);
        let mut sequence = Enumerable::new(cursor).take(0);

        assert_eq!(sequence.to_vec().unwrap(), Vec::<i32>::new());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_is_lazy() {
        let (cursor, pulls) = counting(vec!['a', 'b']);
        let _sequence = Enumerable::new(cursor).filter(|_| true).map(|c| c).take(1);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_counts_after_filter() {
        let mut sequence = Enumerable::range(100).filter(|x| x % 7 == 0).take(3);
        assert_eq!(sequence.to_vec().unwrap(), vec![0, 7, 14]);
    }

    #[test]
    fn test_counter_is_per_stage() {
        let mut sequence = Enumerable::range(10).take(5).skip(1).take(2);
        assert_eq!(sequence.to_vec().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_stays_exhausted() {
        let (cursor, pulls) = counting(0..);
        let mut sequence = take(Enumerable::new(cursor), 2);

        assert_eq!(sequence.to_vec().unwrap(), vec![0, 1]);
        assert_eq!(sequence.to_vec().unwrap(), Vec::<i32>::new());
        assert_eq!(sequence.first().unwrap(), None);
        assert_eq!(pulls.get(), 2);
    }
}
