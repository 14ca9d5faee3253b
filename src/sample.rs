//! Reference task set.

use crate::models::Task;

const PRIORITIES: [i32; 8] = [1, 2, 3, 3, 2, 2, 1, 1];

/// The eight sample tasks `task1..task8` in arrival order.
pub fn reference_tasks() -> Vec<Task> {
    PRIORITIES
        .iter()
        .enumerate()
        .map(|(i, &priority)| Task::new(format!("task{}", i + 1), priority))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_tasks() {
        let tasks = reference_tasks();
        assert_eq!(tasks.len(), 8);
        assert_eq!(tasks[0], Task::new("task1", 1));
        assert_eq!(tasks[3], Task::new("task4", 3));
        assert_eq!(tasks[7], Task::new("task8", 1));
    }
}
