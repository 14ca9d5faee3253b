//! Order-then-dispatch scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the quantum.
//! 2. Order the initial tasks with the selected queueing mode.
//! 3. Build the queue and drain it with the selected dispatch loop.

use log::{info, warn};

use crate::config::{RunConfig, DEFAULT_BURST_TIME};
use crate::dispatch::{DispatchMode, DispatchObserver, DispatchReport, Dispatcher, Quantum};
use crate::error::Result;
use crate::models::{Task, TaskQueue};
use crate::oracle::ConfirmationOracle;
use crate::ordering::QueueingMode;
use crate::validation::validate_tasks;

/// Input container for a scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    /// Initial tasks in arrival order.
    pub tasks: Vec<Task>,
    /// Queueing discipline applied before dispatch.
    pub mode: QueueingMode,
    /// Dispatch loop.
    pub dispatch: DispatchMode,
    /// Quantum length; validated when the run starts.
    pub burst_time: i64,
    /// Seed for `QueueingMode::Shuffle`.
    pub seed: Option<u64>,
    /// Optional cap on total quanta.
    pub max_quanta: Option<u64>,
}

impl RunRequest {
    /// Creates a request with priority ordering and non-preemptive dispatch.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            mode: QueueingMode::default(),
            dispatch: DispatchMode::default(),
            burst_time: DEFAULT_BURST_TIME,
            seed: None,
            max_quanta: None,
        }
    }

    pub fn with_mode(mut self, mode: QueueingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_quanta(mut self, limit: u64) -> Self {
        self.max_quanta = Some(limit);
        self
    }
}

impl From<&RunConfig> for RunRequest {
    fn from(config: &RunConfig) -> Self {
        Self {
            tasks: config.effective_tasks(),
            mode: config.mode,
            dispatch: config.dispatch,
            burst_time: config.burst_time,
            seed: config.seed,
            max_quanta: config.max_quanta,
        }
    }
}

/// Orders tasks, then dispatches them.
///
/// # Example
///
/// ```
/// use u_queueing::dispatch::{DispatchMode, NoopObserver};
/// use u_queueing::models::Task;
/// use u_queueing::oracle::ScriptedOracle;
/// use u_queueing::ordering::QueueingMode;
/// use u_queueing::scheduler::{QueueScheduler, RunRequest};
///
/// let request = RunRequest::new(vec![Task::new("low", 3), Task::new("high", 1)])
///     .with_mode(QueueingMode::Priority)
///     .with_dispatch(DispatchMode::Preemptive)
///     .with_burst_time(1);
///
/// let mut oracle = ScriptedOracle::new(true);
/// let report = QueueScheduler::new()
///     .run(&request, &mut oracle, &mut NoopObserver)
///     .unwrap();
/// assert_eq!(report.completion_order(), vec!["high", "low"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueScheduler;

impl QueueScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Builds the initial queue for `request` without dispatching it.
    pub fn prepare(&self, request: &RunRequest) -> TaskQueue {
        if let Err(findings) = validate_tasks(&request.tasks) {
            for finding in findings {
                warn!("{}", finding.message);
            }
        }

        let policy = request.mode.policy(request.seed);
        info!(
            "Ordering {} tasks with {} ({})",
            request.tasks.len(),
            policy.name(),
            policy.description()
        );
        TaskQueue::from(policy.order(&request.tasks))
    }

    /// Runs `request` to completion.
    ///
    /// # Errors
    /// - [`Error::InvalidQuantum`](crate::Error::InvalidQuantum) for `burst_time <= 0`.
    /// - [`Error::EmptyQueue`](crate::Error::EmptyQueue) for an empty task list.
    /// - Anything the dispatcher, oracle or observer raises.
    pub fn run<O, V>(
        &self,
        request: &RunRequest,
        oracle: &mut O,
        observer: &mut V,
    ) -> Result<DispatchReport>
    where
        O: ConfirmationOracle + ?Sized,
        V: DispatchObserver + ?Sized,
    {
        let quantum = Quantum::new(request.burst_time)?;
        let mut queue = self.prepare(request);
        self.dispatch(request, quantum, &mut queue, oracle, observer)
    }

    /// Dispatches an already prepared queue.
    pub fn dispatch<O, V>(
        &self,
        request: &RunRequest,
        quantum: Quantum,
        queue: &mut TaskQueue,
        oracle: &mut O,
        observer: &mut V,
    ) -> Result<DispatchReport>
    where
        O: ConfirmationOracle + ?Sized,
        V: DispatchObserver + ?Sized,
    {
        let mut dispatcher = Dispatcher::new(quantum);
        if let Some(limit) = request.max_quanta {
            dispatcher = dispatcher.with_max_quanta(limit);
        }
        dispatcher.run(request.dispatch, queue, oracle, observer)
    }
}
