//! Task model.
//!
//! A task is a named unit of work carrying a single priority. It has no
//! behavior of its own: ordering policies decide where it sits in the
//! queue and the dispatch loop decides when it leaves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A task to be queued and dispatched.
///
/// Identity is fixed at construction: fields are private and there are
/// no setters, so a task never changes for the lifetime of a run.
///
/// # Priority Convention
/// **Lower value = higher precedence** under `priority_mode`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    name: String,
    priority: i32,
}

impl Task {
    /// Creates a new task.
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }

    /// Task name (unique within a run by convention only).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scheduling priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new("task1", 3);
        assert_eq!(task.name(), "task1");
        assert_eq!(task.priority(), 3);
    }

    #[test]
    fn test_task_display_is_name() {
        assert_eq!(Task::new("build", 1).to_string(), "build");
    }

    #[test]
    fn test_task_serde() {
        let task: Task = serde_json::from_str(r#"{"name":"t","priority":-2}"#).unwrap();
        assert_eq!(task, Task::new("t", -2));
    }
}
