//! Pull policies plugged into a [`Stage`](crate::stage::Stage)
//!
//! Every transformation is one `Stage` configured with a `Continue`, an
//! `Emit` and a `Transform` policy. Closures implement the policy traits
//! directly; the named types here cover the built-in operations.

/// Decides whether a stage keeps running after seeing an upstream element
pub trait Continue<T> {
    /// Returning `false` ends the stage; the element is dropped and nothing
    /// further is pulled upstream
    fn should_continue(&mut self, item: &T) -> bool;

    /// Report ahead of a pull that no further element can pass
    ///
    /// Lets bounded policies stop without pulling one element past their limit.
    fn spent(&self) -> bool {
        false
    }
}

/// Decides whether an upstream element is produced downstream or skipped
pub trait Emit<T> {
    fn should_emit(&mut self, item: &T) -> bool;
}

/// Maps an emitted upstream element to the downstream element
pub trait Transform<T> {
    type Output;

    fn transform(&mut self, item: T) -> Self::Output;
}

impl<T, F> Continue<T> for F
where
    F: FnMut(&T) -> bool,
{
    fn should_continue(&mut self, item: &T) -> bool {
        self(item)
    }
}

impl<T, F> Emit<T> for F
where
    F: FnMut(&T) -> bool,
{
    fn should_emit(&mut self, item: &T) -> bool {
        self(item)
    }
}

impl<T, R, F> Transform<T> for F
where
    F: FnMut(T) -> R,
{
    type Output = R;

    fn transform(&mut self, item: T) -> R {
        self(item)
    }
}

/// Policy that accepts every element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<T> Continue<T> for Always {
    fn should_continue(&mut self, _item: &T) -> bool {
        true
    }
}

impl<T> Emit<T> for Always {
    fn should_emit(&mut self, _item: &T) -> bool {
        true
    }
}

/// Transform that passes elements through unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Transform<T> for Identity {
    type Output = T;

    fn transform(&mut self, item: T) -> T {
        item
    }
}

/// Continue policy admitting the first `limit` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted {
    taken: usize,
    limit: usize,
}

impl Counted {
    pub fn new(limit: usize) -> Self {
        Counted { taken: 0, limit }
    }

    #[cfg(test)]
    pub(crate) fn taken(&self) -> usize {
        self.taken
    }
}

impl<T> Continue<T> for Counted {
    fn should_continue(&mut self, _item: &T) -> bool {
        let admit = self.taken < self.limit;
        self.taken = self.taken.saturating_add(1);
        admit
    }

    fn spent(&self) -> bool {
        self.taken >= self.limit
    }
}

/// Emit policy dropping the first `limit` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    skipped: usize,
    limit: usize,
}

impl Skipped {
    pub fn new(limit: usize) -> Self {
        Skipped { skipped: 0, limit }
    }
}

impl<T> Emit<T> for Skipped {
    fn should_emit(&mut self, _item: &T) -> bool {
        let emit = self.skipped >= self.limit;
        self.skipped = self.skipped.saturating_add(1);
        emit
    }
}

/// Emit policy negating a predicate, evaluated afresh for every element
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(pub P);

impl<T, P> Emit<T> for Not<P>
where
    P: FnMut(&T) -> bool,
{
    fn should_emit(&mut self, item: &T) -> bool {
        !(self.0)(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_as_policies() {
        let mut even = |x: &i32| x % 2 == 0;
        assert!(Emit::should_emit(&mut even, &4));
        assert!(!Continue::should_continue(&mut even, &3));

        let mut double = |x: i32| x * 2;
        assert_eq!(Transform::transform(&mut double, 21), 42);
    }

    #[test]
    fn test_counted_admits_limit_then_stops() {
        let mut policy = Counted::new(2);

        assert!(!Continue::<u8>::spent(&policy));
        assert!(policy.should_continue(&'a'));
        assert!(policy.should_continue(&'b'));
        assert!(Continue::<char>::spent(&policy));
        assert!(!policy.should_continue(&'c'));
        assert_eq!(policy.taken(), 3);
    }

    #[test]
    fn test_counted_zero_is_spent_immediately() {
        let policy = Counted::new(0);
        assert!(Continue::<()>::spent(&policy));
    }

    #[test]
    fn test_skipped_drops_prefix() {
        let mut policy = Skipped::new(2);
        let emitted: Vec<bool> = (0..4).map(|x| policy.should_emit(&x)).collect();
        assert_eq!(emitted, vec![false, false, true, true]);
    }

    #[test]
    fn test_not_retests_every_element() {
        let mut policy = Not(|x: &i32| *x < 3);
        let emitted: Vec<bool> = [1, 2, 3, 1, 2, 3]
            .iter()
            .map(|x| policy.should_emit(x))
            .collect();
        assert_eq!(emitted, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_always_and_identity() {
        assert!(Continue::should_continue(&mut Always, &"x"));
        assert!(Emit::should_emit(&mut Always, &"x"));
        assert_eq!(Identity.transform(vec![1, 2]), vec![1, 2]);
    }
}
