//! Quantum-based dispatch loops.
//!
//! A dispatcher drains a [`TaskQueue`] one task at a time. After each
//! quantum it asks a [`ConfirmationOracle`](crate::oracle::ConfirmationOracle)
//! whether the task in service is finished:
//!
//! - **Non-preemptive**: an unfinished task stays in service until confirmed.
//! - **Preemptive**: an unfinished task is rotated to the back of the queue.
//!
//! A quantum is a logical unit, not wall-clock time: one quantum elapsing
//! is a single state transition.
//!
//! # Usage
//!
//! ```
//! use u_queueing::dispatch::{Dispatcher, NoopObserver, Quantum};
//! use u_queueing::models::{Task, TaskQueue};
//! use u_queueing::oracle::ScriptedOracle;
//!
//! let mut queue = TaskQueue::from(vec![Task::new("A", 1), Task::new("B", 2)]);
//! let mut oracle = ScriptedOracle::new(true).with_answers("A", [false]);
//!
//! let dispatcher = Dispatcher::new(Quantum::new(1).unwrap());
//! let report = dispatcher
//!     .run_preemptive(&mut queue, &mut oracle, &mut NoopObserver)
//!     .unwrap();
//!
//! assert_eq!(report.completion_order(), vec!["B", "A"]);
//! assert!(queue.is_empty());
//! ```

mod engine;
mod report;
mod state;

pub use engine::Dispatcher;
pub use report::{DispatchEvent, DispatchReport};
pub use state::DispatchState;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{Task, TaskQueue};

/// Fixed time slice granted to the task in service.
///
/// Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantum(u64);

impl Quantum {
    /// Validates a burst time.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] when `burst_time <= 0`.
    pub fn new(burst_time: i64) -> Result<Self> {
        if burst_time <= 0 {
            return Err(Error::InvalidQuantum(burst_time));
        }
        Ok(Self(burst_time as u64))
    }

    /// Length of the quantum in simulated time units.
    pub fn units(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Quantum {
    type Error = Error;

    fn try_from(burst_time: i64) -> Result<Self> {
        Self::new(burst_time)
    }
}

/// Which dispatch loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Service each task until it is confirmed complete.
    #[default]
    NonPreemptive,
    /// Rotate unfinished tasks to the back after each quantum.
    Preemptive,
}

impl DispatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMode::NonPreemptive => "non_preemptive",
            DispatchMode::Preemptive => "preemptive",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "non_preemptive" | "nonpreemptive" => Ok(DispatchMode::NonPreemptive),
            "preemptive" => Ok(DispatchMode::Preemptive),
            _ => Err(Error::UnknownDispatch(s.to_string())),
        }
    }
}

/// Receives dispatch progress.
///
/// Every hook defaults to a no-op. Returning an error aborts the run.
pub trait DispatchObserver {
    /// A task entered service.
    fn on_dispatch(&mut self, _task: &Task) -> Result<()> {
        Ok(())
    }

    /// A task was confirmed complete and left the queue.
    fn on_completed(&mut self, _task: &Task) -> Result<()> {
        Ok(())
    }

    /// A task was not confirmed and stays in service.
    fn on_retried(&mut self, _task: &Task) -> Result<()> {
        Ok(())
    }

    /// A task was not confirmed and moved to the back of the queue.
    fn on_rotated(&mut self, _task: &Task) -> Result<()> {
        Ok(())
    }

    /// Remaining queue after a preemptive step selected its next task.
    fn on_queue(&mut self, _queue: &TaskQueue) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_positive() {
        assert_eq!(Quantum::new(1000).unwrap().units(), 1000);
    }

    #[test]
    fn test_quantum_rejects_non_positive() {
        assert!(matches!(Quantum::new(0), Err(Error::InvalidQuantum(0))));
        assert!(matches!(
            Quantum::try_from(-5i64),
            Err(Error::InvalidQuantum(-5))
        ));
    }

    #[test]
    fn test_dispatch_mode_parse() {
        assert_eq!(
            "non-preemptive".parse::<DispatchMode>().unwrap(),
            DispatchMode::NonPreemptive
        );
        assert_eq!(
            "Preemptive".parse::<DispatchMode>().unwrap(),
            DispatchMode::Preemptive
        );
        assert!("rr".parse::<DispatchMode>().is_err());
    }

    #[test]
    fn test_dispatch_mode_display_round_trip() {
        for mode in [DispatchMode::NonPreemptive, DispatchMode::Preemptive] {
            assert_eq!(mode.to_string().parse::<DispatchMode>().unwrap(), mode);
        }
    }
}
