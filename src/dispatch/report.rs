//! Dispatch trace.

use serde::{Deserialize, Serialize};

use super::DispatchMode;

/// One step of a dispatch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DispatchEvent {
    /// Task entered service.
    Dispatched { task: String },
    /// Task confirmed complete after `quanta` quanta of service in its final stint.
    Completed { task: String, quanta: u64 },
    /// Task not confirmed `times` consecutive quanta; stays in service (non-preemptive).
    Retried { task: String, times: u64 },
    /// Task not confirmed; moved to the back of the queue (preemptive).
    Rotated { task: String },
}

/// Ordered record of what happened during a run.
///
/// Counts and order only; no wait-time or turnaround figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    /// Loop that produced this report.
    pub mode: DispatchMode,
    /// Quantum length in simulated time units.
    pub quantum: u64,
    /// Quanta that elapsed over the whole run.
    pub quanta_elapsed: u64,
    /// Events in the order they occurred.
    pub events: Vec<DispatchEvent>,
}

impl DispatchReport {
    pub(crate) fn new(mode: DispatchMode, quantum: u64) -> Self {
        Self {
            mode,
            quantum,
            quanta_elapsed: 0,
            events: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, event: DispatchEvent) {
        self.events.push(event);
    }

    /// Counts one more unconfirmed quantum for `task`.
    ///
    /// Consecutive retries of the same task share one event, so a task
    /// that is never confirmed grows the trace by a counter, not a list.
    pub(crate) fn record_retry(&mut self, task: &str) {
        if let Some(DispatchEvent::Retried { task: last, times }) = self.events.last_mut() {
            if last == task {
                *times += 1;
                return;
            }
        }
        self.events.push(DispatchEvent::Retried {
            task: task.to_string(),
            times: 1,
        });
    }

    /// Total simulated time (`quanta_elapsed × quantum`), saturating at `u64::MAX`.
    pub fn simulated_time(&self) -> u64 {
        self.quanta_elapsed.saturating_mul(self.quantum)
    }

    /// Task names in the order they were confirmed complete.
    pub fn completion_order(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DispatchEvent::Completed { task, .. } => Some(task.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.count(|e| matches!(e, DispatchEvent::Completed { .. }))
    }

    pub fn rotation_count(&self) -> usize {
        self.count(|e| matches!(e, DispatchEvent::Rotated { .. }))
    }

    /// Unconfirmed quanta across all non-preemptive retries.
    pub fn retry_count(&self) -> u64 {
        self.events
            .iter()
            .map(|e| match e {
                DispatchEvent::Retried { times, .. } => *times,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&DispatchEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}
