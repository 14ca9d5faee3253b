//! Scheduling entry point.
//!
//! `QueueScheduler` takes a `RunRequest` (initial tasks, queueing mode,
//! dispatch mode, quantum) and performs one complete run. Nothing is
//! scheduled until `run` is called.

mod simple;

pub use simple::{QueueScheduler, RunRequest};
