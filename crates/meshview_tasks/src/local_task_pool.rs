use core::future::Future;
use std::rc::Rc;

use async_executor::LocalExecutor;

use crate::Task;

/// A task pool that runs every spawned future on the thread that ticks it.
///
/// Cloning the pool is cheap and every clone shares the same queue. Nothing runs until the owner
/// ticks the pool, so the owner decides where the event loop's suspension points are: a future
/// that awaits [`yield_now`](crate::yield_now) or an empty channel hands control back to whoever
/// called [`LocalTaskPool::try_tick`].
#[derive(Clone, Default)]
pub struct LocalTaskPool {
    executor: Rc<LocalExecutor<'static>>,
}

impl LocalTaskPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a future onto the pool. The future is not polled until the pool is ticked.
    pub fn spawn<T: 'static>(&self, future: impl Future<Output = T> + 'static) -> Task<T> {
        Task::new(self.executor.spawn(future))
    }

    /// Polls one scheduled task, returning `false` if nothing was ready to run.
    pub fn try_tick(&self) -> bool {
        self.executor.try_tick()
    }

    /// Ticks until no task is ready to make progress and returns how many polls happened.
    ///
    /// Tasks that are waiting on something outside the pool (a channel nobody has written to yet,
    /// for example) stay queued and are resumed by a later call.
    pub fn tick_until_stalled(&self) -> usize {
        let mut ticks = 0;
        while self.executor.try_tick() {
            ticks += 1;
        }
        ticks
    }

    /// Returns `true` if no spawned task is alive.
    pub fn is_idle(&self) -> bool {
        self.executor.is_empty()
    }

    /// Drives the pool on the current thread until `future` completes.
    pub fn run<T>(&self, future: impl Future<Output = T>) -> T {
        futures_lite::future::block_on(self.executor.run(future))
    }
}

impl core::fmt::Debug for LocalTaskPool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LocalTaskPool")
            .field("idle", &self.is_idle())
            .finish()
    }
}
