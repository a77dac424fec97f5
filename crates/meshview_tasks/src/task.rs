use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// A future spawned on a [`LocalTaskPool`](crate::LocalTaskPool).
///
/// Awaiting the task yields the spawned future's output. Dropping it cancels the future, which is
/// then dropped the next time the pool runs; [`Task::detach`] keeps it running instead.
#[derive(Debug)]
#[must_use = "dropping a task cancels it"]
pub struct Task<T>(async_executor::Task<T>);

impl<T> Task<T> {
    pub(crate) fn new(task: async_executor::Task<T>) -> Self {
        Self(task)
    }

    /// Lets the future run to completion without anyone holding on to it.
    pub fn detach(self) {
        self.0.detach();
    }

    /// Returns `true` once the future has produced its output.
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    /// Cancels the future and waits until the pool has dropped it.
    ///
    /// Returns the output if the future completed before it could be cancelled.
    pub async fn cancel(self) -> Option<T> {
        self.0.cancel().await
    }
}

impl<T> Future for Task<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

#[cfg(test)]
mod tests {
    use crate::{LocalTaskPool, yield_now};
    use core::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn awaiting_a_task_yields_its_output() {
        let pool = LocalTaskPool::new();
        let inner = pool.spawn(async {
            yield_now().await;
            21 * 2
        });
        let outer = pool.spawn(async move { inner.await + 1 });

        assert!(!outer.is_finished());
        pool.tick_until_stalled();
        assert!(outer.is_finished());
        assert_eq!(pool.run(outer), 43);
    }

    #[test]
    fn cancelled_tasks_stop_at_their_next_suspension() {
        let pool = LocalTaskPool::new();
        let steps = Rc::new(Cell::new(0));
        let counter = steps.clone();
        let task = pool.spawn(async move {
            while counter.get() < 100 {
                counter.set(counter.get() + 1);
                yield_now().await;
            }
        });

        pool.try_tick();
        assert_eq!(steps.get(), 1);
        assert_eq!(pool.run(task.cancel()), None);
        pool.tick_until_stalled();
        assert_eq!(steps.get(), 1);
        assert!(pool.is_idle());
    }
}
