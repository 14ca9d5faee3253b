//! Scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | Task | Named unit of work with a priority |
//! | TaskQueue | Ordered tasks awaiting dispatch |

mod queue;
mod task;

pub use queue::TaskQueue;
pub use task::Task;
