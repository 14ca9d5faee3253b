//! Dispatch loop driver.
//!
//! Both loops share one state machine; they differ only in what happens
//! to a task that was not confirmed after its quantum.

use log::{debug, info};

use super::{
    DispatchEvent, DispatchMode, DispatchObserver, DispatchReport, DispatchState, Quantum,
};
use crate::error::{Error, Result};
use crate::models::{Task, TaskQueue};
use crate::oracle::ConfirmationOracle;

/// Runs tasks from a queue one quantum at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    quantum: Quantum,
    max_quanta: Option<u64>,
}

impl Dispatcher {
    /// Creates a dispatcher with no quantum limit.
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            max_quanta: None,
        }
    }

    /// Caps the total number of quanta a run may consume.
    pub fn with_max_quanta(mut self, limit: u64) -> Self {
        self.max_quanta = Some(limit);
        self
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }

    /// Runs the loop selected by `mode`.
    pub fn run<O, V>(
        &self,
        mode: DispatchMode,
        queue: &mut TaskQueue,
        oracle: &mut O,
        observer: &mut V,
    ) -> Result<DispatchReport>
    where
        O: ConfirmationOracle + ?Sized,
        V: DispatchObserver + ?Sized,
    {
        if queue.is_empty() {
            return Err(Error::EmptyQueue);
        }

        info!(
            "Dispatch start: mode={}, quantum={}, tasks={}",
            mode,
            self.quantum.units(),
            queue.len()
        );

        let mut report = DispatchReport::new(mode, self.quantum.units());
        let mut state = DispatchState::Idle;

        loop {
            state = match state {
                DispatchState::Idle => {
                    let next = queue.pop_front();
                    enter(next, &mut report, observer)?
                }
                DispatchState::Running { task, quanta } => {
                    self.elapse(&mut report)?;
                    let quanta = quanta + 1;

                    if oracle.confirm(&task)? {
                        debug!("Task {} completed after {} quanta", task.name(), quanta);
                        report.record(DispatchEvent::Completed {
                            task: task.name().to_string(),
                            quanta,
                        });
                        observer.on_completed(&task)?;
                        advance(mode, queue, &mut report, observer)?
                    } else {
                        match mode {
                            DispatchMode::NonPreemptive => {
                                debug!("Task {} not complete, retrying", task.name());
                                report.record_retry(task.name());
                                observer.on_retried(&task)?;
                                DispatchState::Running { task, quanta }
                            }
                            DispatchMode::Preemptive => {
                                debug!("Task {} not complete, rotating", task.name());
                                report.record(DispatchEvent::Rotated {
                                    task: task.name().to_string(),
                                });
                                observer.on_rotated(&task)?;
                                queue.push_back(task);
                                advance(mode, queue, &mut report, observer)?
                            }
                        }
                    }
                }
                DispatchState::Done => break,
            };
        }

        info!(
            "Dispatch finished: completed={}, quanta={}, simulated_time={}",
            report.completed_count(),
            report.quanta_elapsed,
            report.simulated_time()
        );

        Ok(report)
    }

    /// Services each task until it is confirmed complete.
    ///
    /// # Errors
    /// - [`Error::EmptyQueue`] if `queue` is empty on entry.
    /// - [`Error::QuantumLimit`] if a quantum limit is set and exceeded.
    /// - Any error raised by the oracle or observer.
    pub fn run_non_preemptive<O, V>(
        &self,
        queue: &mut TaskQueue,
        oracle: &mut O,
        observer: &mut V,
    ) -> Result<DispatchReport>
    where
        O: ConfirmationOracle + ?Sized,
        V: DispatchObserver + ?Sized,
    {
        self.run(DispatchMode::NonPreemptive, queue, oracle, observer)
    }

    /// Grants each task one quantum, rotating unfinished tasks to the back.
    ///
    /// # Errors
    /// Same as [`Dispatcher::run_non_preemptive`].
    pub fn run_preemptive<O, V>(
        &self,
        queue: &mut TaskQueue,
        oracle: &mut O,
        observer: &mut V,
    ) -> Result<DispatchReport>
    where
        O: ConfirmationOracle + ?Sized,
        V: DispatchObserver + ?Sized,
    {
        self.run(DispatchMode::Preemptive, queue, oracle, observer)
    }

    fn elapse(&self, report: &mut DispatchReport) -> Result<()> {
        report.quanta_elapsed += 1;
        match self.max_quanta {
            Some(limit) if report.quanta_elapsed > limit => Err(Error::QuantumLimit { limit }),
            _ => Ok(()),
        }
    }
}

/// Pops the next task after a quantum. Preemptive runs show the remaining queue.
fn advance<V>(
    mode: DispatchMode,
    queue: &mut TaskQueue,
    report: &mut DispatchReport,
    observer: &mut V,
) -> Result<DispatchState>
where
    V: DispatchObserver + ?Sized,
{
    let next = queue.pop_front();
    if mode == DispatchMode::Preemptive && next.is_some() {
        observer.on_queue(queue)?;
    }
    enter(next, report, observer)
}

fn enter<V>(next: Option<Task>, report: &mut DispatchReport, observer: &mut V) -> Result<DispatchState>
where
    V: DispatchObserver + ?Sized,
{
    if let Some(task) = &next {
        debug!("Dispatching task {}", task.name());
        report.record(DispatchEvent::Dispatched {
            task: task.name().to_string(),
        });
        observer.on_dispatch(task)?;
    }
    Ok(DispatchState::serve(next))
}
