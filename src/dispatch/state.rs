//! Dispatch state machine.

use crate::models::Task;

/// State of a dispatch loop.
///
/// ```text
/// Idle ──pop──▶ Running ──quantum──▶ Running | Done
/// ```
///
/// The loop terminates only from `Done`, which is reached when no task is
/// in service and the queue has nothing left to pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
    /// Nothing in service yet.
    Idle,
    /// `task` is in service and has been granted `quanta` full quanta so far.
    Running { task: Task, quanta: u64 },
    /// Queue drained and no task in service.
    Done,
}

impl DispatchState {
    /// Enters service for `task`, or finishes when there is none.
    pub fn serve(task: Option<Task>) -> Self {
        match task {
            Some(task) => DispatchState::Running { task, quanta: 0 },
            None => DispatchState::Done,
        }
    }

    /// Task currently in service.
    pub fn current_task(&self) -> Option<&Task> {
        match self {
            DispatchState::Running { task, .. } => Some(task),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, DispatchState::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve() {
        let state = DispatchState::serve(Some(Task::new("A", 1)));
        assert_eq!(state.current_task().map(Task::name), Some("A"));
        assert!(!state.is_done());

        assert!(DispatchState::serve(None).is_done());
        assert!(DispatchState::Idle.current_task().is_none());
    }
}
