//! # Enumerable - Lazy Sequence Combinators
//!
//! A lazy, single-pass sequence abstraction over a pull-based cursor.
//!
//! An [`Enumerable`] owns one [`Cursor`]. Transformations (`filter`, `map`,
//! `take`, `take_while`, `skip`, `skip_while`) wrap that cursor in a new
//! [`Stage`] without pulling anything. Terminal operations (`to_vec`, `count`,
//! `reduce`, `find`, `first`, `some`, `every`) drive the chain, one element at
//! a time, and stop as soon as their answer is known.
//!
//! - **Fused**: every transformation is the same pull loop configured with
//!   three policies, so a chain never buffers intermediate results
//! - **Short-circuiting**: `take` and `take_while` stop pulling upstream, which
//!   makes unbounded sources safe to consume
//! - **Single-pass**: cursors move into each new stage; a consumed element is
//!   never produced again
//! - **Fallible sources**: source errors propagate through `Result`, with no
//!   panics in the library itself
//!
//! ```
//! use enumerable::Enumerable;
//!
//! let mut firsts = Enumerable::wrap(1u64..)
//!     .filter(|x| x % 3 == 0)
//!     .map(|x| x * x)
//!     .take(3);
//!
//! assert_eq!(firsts.to_vec().unwrap(), vec![9, 36, 81]);
//! assert_eq!(firsts.count().unwrap(), 0);
//! ```

pub mod cursor;
pub mod cursors;
pub mod enumerable;
pub mod error;
pub mod filter;
pub mod map;
pub mod policy;
pub mod skip;
pub mod skip_while;
pub mod stage;
pub mod take;
pub mod take_while;
pub mod terminal;

#[cfg(test)]
mod testing;

pub use cursor::Cursor;
pub use cursors::{IterCursor, RangeArgs, RangeCursor, TryIterCursor};
pub use enumerable::{Enumerable, IntoIter};
pub use error::SourceError;
pub use filter::Filter;
pub use map::Map;
pub use policy::{Always, Continue, Counted, Emit, Identity, Not, Skipped, Transform};
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use stage::Stage;
pub use take::Take;
pub use take_while::TakeWhile;
