//! Cooperative task scheduling simulation.
//!
//! Named tasks with integer priorities are ordered by a queueing
//! discipline and then dispatched one quantum at a time. After every
//! quantum a confirmation oracle decides whether the task in service is
//! finished.
//!
//! # Modules
//!
//! - **`models`**: `Task`, `TaskQueue`
//! - **`ordering`**: Queueing disciplines (priority, reverse priority,
//!   FIFO, LIFO, shuffle) and the `QueueingMode` selector
//! - **`dispatch`**: Non-preemptive and preemptive dispatch loops
//! - **`oracle`**: Confirmation oracles (interactive prompt, scripted)
//! - **`scheduler`**: `QueueScheduler`, the order-then-dispatch entry point
//! - **`config`**: TOML run configuration
//! - **`validation`**: Task list checks (duplicate or empty names)
//! - **`display`**: Console output for queues and dispatch progress
//! - **`sample`**: Reference task set
//!
//! # Time Model
//!
//! A quantum is a logical unit. Elapsing one quantum is a single state
//! transition; nothing blocks or sleeps.

pub mod config;
pub mod dispatch;
pub mod display;
mod error;
pub mod models;
pub mod oracle;
pub mod ordering;
pub mod sample;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
