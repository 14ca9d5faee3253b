//! Run configuration.
//!
//! Loaded from TOML. Every field is optional; a missing task list means
//! the reference sample tasks.
//!
//! ```toml
//! mode = "reverse_priority"
//! dispatch = "preemptive"
//! burst_time = 10
//!
//! [[tasks]]
//! name = "build"
//! priority = 1
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dispatch::DispatchMode;
use crate::error::Result;
use crate::models::Task;
use crate::ordering::QueueingMode;
use crate::sample::reference_tasks;

/// Burst time used by the reference run.
pub const DEFAULT_BURST_TIME: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub mode: QueueingMode,
    pub dispatch: DispatchMode,
    pub burst_time: i64,
    pub seed: Option<u64>,
    pub max_quanta: Option<u64>,
    pub tasks: Vec<Task>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: QueueingMode::default(),
            dispatch: DispatchMode::default(),
            burst_time: DEFAULT_BURST_TIME,
            seed: None,
            max_quanta: None,
            tasks: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("RunConfig::load path={}", path.display());
        let config = Self::from_toml(&fs::read_to_string(path)?)?;
        debug!(
            "Config loaded: mode={}, dispatch={}, burst_time={}, tasks={}",
            config.mode,
            config.dispatch,
            config.burst_time,
            config.tasks.len()
        );
        Ok(config)
    }

    /// Configured tasks, or the reference set when none are configured.
    pub fn effective_tasks(&self) -> Vec<Task> {
        if self.tasks.is_empty() {
            reference_tasks()
        } else {
            self.tasks.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_toml("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.burst_time, 1000);
        assert_eq!(config.mode, QueueingMode::Priority);
        assert_eq!(config.dispatch, DispatchMode::NonPreemptive);
        assert_eq!(config.effective_tasks().len(), 8);
    }

    #[test]
    fn test_full_document() {
        let config = RunConfig::from_toml(
            r#"
            mode = "shuffle"
            dispatch = "preemptive"
            burst_time = 5
            seed = 42
            max_quanta = 100

            [[tasks]]
            name = "a"
            priority = 2

            [[tasks]]
            name = "b"
            priority = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, QueueingMode::Shuffle);
        assert_eq!(config.dispatch, DispatchMode::Preemptive);
        assert_eq!(config.burst_time, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_quanta, Some(100));
        assert_eq!(
            config.effective_tasks(),
            vec![Task::new("a", 2), Task::new("b", 1)]
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = RunConfig::from_toml(r#"mode = "random""#).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunConfig::load(Path::new("/nonexistent/u-queueing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
