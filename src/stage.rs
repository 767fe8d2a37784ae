use crate::cursor::Cursor;
use crate::policy::{Continue, Emit, Transform};

/// The single pull loop behind every lazy transformation
///
/// For each upstream element `x` the stage asks, in order:
///
/// 1. `continue(x)`: if false the stage ends and reports exhaustion from then
///    on, without consulting the other policies or pulling again
/// 2. `emit(x)`: if false the element is dropped and the next one is pulled
/// 3. `transform(x)`: the emitted element becomes the downstream element
///
/// Each stage owns its policies, so counters and other policy state are
/// private to the stage and live as long as it does.
#[derive(Debug)]
pub struct Stage<C, K, E, T> {
    upstream: C,
    proceed: K,
    emit: E,
    transform: T,
    finished: bool,
}

impl<C, K, E, T> Stage<C, K, E, T> {
    pub fn new(upstream: C, proceed: K, emit: E, transform: T) -> Self {
        Stage {
            upstream,
            proceed,
            emit,
            transform,
            finished: false,
        }
    }

    /// Returns true once the stage has stopped pulling upstream
    #[cfg(test)]
    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<C, K, E, T> Cursor for Stage<C, K, E, T>
where
    C: Cursor,
    K: Continue<C::Element>,
    E: Emit<C::Element>,
    T: Transform<C::Element>,
{
    type Element = T::Output;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Element>, Self::Error> {
        while !self.finished {
            if self.proceed.spent() {
                self.finished = true;
                break;
            }

            let Some(item) = self.upstream.pull()? else {
                self.finished = true;
                break;
            };

            if !self.proceed.should_continue(&item) {
                self.finished = true;
                break;
            }

            if self.emit.should_emit(&item) {
                return Ok(Some(self.transform.transform(item)));
            }
        }

        Ok(None)
    }
}
