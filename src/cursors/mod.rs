pub mod fallible;
pub mod iter;
pub mod range;

pub use fallible::TryIterCursor;
pub use iter::IterCursor;
pub use range::{RangeArgs, RangeCursor};
