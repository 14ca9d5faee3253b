//! Queueing disciplines.
//!
//! Each discipline maps a sequence of tasks to a new sequence. Policies
//! never mutate the caller's slice or the tasks themselves; shuffling
//! returns a fresh permutation like every other policy.
//!
//! # Usage
//!
//! ```
//! use u_queueing::models::Task;
//! use u_queueing::ordering::{self, QueueingMode};
//!
//! let tasks = vec![Task::new("b", 2), Task::new("a", 1)];
//! let ordered = ordering::priority_mode(&tasks);
//! assert_eq!(ordered[0].name(), "a");
//!
//! let policy = QueueingMode::Lifo.policy(None);
//! assert_eq!(policy.order(&tasks)[0].name(), "a");
//! ```

mod mode;
pub mod rules;

pub use mode::QueueingMode;

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Debug;

use crate::models::Task;

/// A queueing discipline that orders tasks before dispatch.
pub trait OrderingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "PRIORITY", "FIFO").
    fn name(&self) -> &'static str;

    /// Returns the tasks in dispatch order.
    fn order(&self, tasks: &[Task]) -> Vec<Task>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Stable sort by ascending priority.
///
/// Equal-priority tasks keep their relative input order.
pub fn priority_mode(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(Task::priority);
    ordered
}

/// Stable sort by descending priority.
///
/// Equal-priority tasks keep their relative input order.
pub fn rev_priority_mode(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(|a, b| b.priority().cmp(&a.priority()));
    ordered
}

/// Arrival order, unchanged.
pub fn fifo_mode(tasks: &[Task]) -> Vec<Task> {
    tasks.to_vec()
}

/// Reverse arrival order.
pub fn lifo_mode(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().rev().cloned().collect()
}

/// Uniformly random permutation drawn from `rng`.
pub fn shuffle_mode<R: Rng + ?Sized>(tasks: &[Task], rng: &mut R) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.shuffle(rng);
    ordered
}
