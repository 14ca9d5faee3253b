//! Built-in queueing policies.
//!
//! One unit struct per discipline, each delegating to the matching pure
//! function in [`crate::ordering`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{fifo_mode, lifo_mode, priority_mode, rev_priority_mode, shuffle_mode, OrderingPolicy};
use crate::models::Task;

/// Ascending priority (lowest value first).
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl OrderingPolicy for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn order(&self, tasks: &[Task]) -> Vec<Task> {
        priority_mode(tasks)
    }

    fn description(&self) -> &'static str {
        "High priority first"
    }
}

/// Descending priority (highest value first).
#[derive(Debug, Clone, Copy)]
pub struct ReversePriority;

impl OrderingPolicy for ReversePriority {
    fn name(&self) -> &'static str {
        "REVERSE_PRIORITY"
    }

    fn order(&self, tasks: &[Task]) -> Vec<Task> {
        rev_priority_mode(tasks)
    }

    fn description(&self) -> &'static str {
        "Low priority first"
    }
}

/// First In, First Out.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl OrderingPolicy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn order(&self, tasks: &[Task]) -> Vec<Task> {
        fifo_mode(tasks)
    }

    fn description(&self) -> &'static str {
        "Oldest task first"
    }
}

/// Last In, First Out.
#[derive(Debug, Clone, Copy)]
pub struct Lifo;

impl OrderingPolicy for Lifo {
    fn name(&self) -> &'static str {
        "LIFO"
    }

    fn order(&self, tasks: &[Task]) -> Vec<Task> {
        lifo_mode(tasks)
    }

    fn description(&self) -> &'static str {
        "Newest task first"
    }
}

/// Random permutation.
///
/// With a seed, every call yields the same permutation for the same input.
/// Without one, the thread-local generator is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shuffle {
    pub seed: Option<u64>,
}

impl Shuffle {
    /// Creates a deterministic shuffle.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl OrderingPolicy for Shuffle {
    fn name(&self) -> &'static str {
        "SHUFFLE"
    }

    fn order(&self, tasks: &[Task]) -> Vec<Task> {
        match self.seed {
            Some(seed) => shuffle_mode(tasks, &mut StdRng::seed_from_u64(seed)),
            None => shuffle_mode(tasks, &mut rand::rng()),
        }
    }

    fn description(&self) -> &'static str {
        "Random order"
    }
}
