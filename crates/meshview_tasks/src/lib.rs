#![doc = "Cooperative, single-threaded task execution for the meshview loading pipeline."]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod local_task_pool;
mod task;

pub use local_task_pool::LocalTaskPool;
pub use task::Task;

pub use futures_lite;
pub use futures_lite::future::{block_on, yield_now};

/// The tasks prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{LocalTaskPool, Task, block_on, yield_now};
}
