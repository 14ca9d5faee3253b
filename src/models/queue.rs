//! Task queue model.
//!
//! The queue is built once from the output of an ordering policy and then
//! mutated in place by a dispatch loop: tasks leave from the front and,
//! under preemptive dispatch, re-enter at the back.

use std::collections::VecDeque;

use super::Task;

/// An ordered queue of tasks awaiting dispatch.
///
/// Tasks only re-enter through [`TaskQueue::push_back`] after being
/// removed with [`TaskQueue::pop_front`], so a task never appears twice
/// at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the front task.
    pub fn pop_front(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Appends a task at the back (rotation).
    pub fn push_back(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// The task that would be dispatched next.
    pub fn current(&self) -> Option<&Task> {
        self.tasks.front()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Task names in queue order.
    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(Task::name).collect()
    }
}

impl From<Vec<Task>> for TaskQueue {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into(),
        }
    }
}

impl FromIterator<Task> for TaskQueue {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_queue(names: &[&str]) -> TaskQueue {
        names.iter().map(|n| Task::new(*n, 0)).collect()
    }

    #[test]
    fn test_pop_and_rotate() {
        let mut queue = make_queue(&["A", "B", "C"]);
        let a = queue.pop_front().unwrap();
        queue.push_back(a);
        assert_eq!(queue.names(), vec!["B", "C", "A"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_current_peeks_front() {
        let queue = make_queue(&["A", "B"]);
        assert_eq!(queue.current().map(Task::name), Some("A"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = TaskQueue::new();
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn test_from_vec_keeps_order() {
        let queue = TaskQueue::from(vec![Task::new("x", 2), Task::new("y", 1)]);
        assert_eq!(queue.names(), vec!["x", "y"]);
    }
}
