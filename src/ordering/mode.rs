//! Queueing mode selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rules::{Fifo, Lifo, Priority, ReversePriority, Shuffle};
use super::OrderingPolicy;
use crate::error::Error;

/// How the task queue is ordered before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueingMode {
    #[default]
    Priority,
    ReversePriority,
    Fifo,
    Lifo,
    Shuffle,
}

impl QueueingMode {
    /// Every mode, in picker order.
    pub const ALL: [QueueingMode; 5] = [
        QueueingMode::Priority,
        QueueingMode::ReversePriority,
        QueueingMode::Fifo,
        QueueingMode::Lifo,
        QueueingMode::Shuffle,
    ];

    /// Stable identifier, as used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueingMode::Priority => "priority",
            QueueingMode::ReversePriority => "reverse_priority",
            QueueingMode::Fifo => "fifo",
            QueueingMode::Lifo => "lifo",
            QueueingMode::Shuffle => "shuffle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QueueingMode::Priority => "Priority",
            QueueingMode::ReversePriority => "Low First",
            QueueingMode::Fifo => "FIFO",
            QueueingMode::Lifo => "LIFO",
            QueueingMode::Shuffle => "Shuffle",
        }
    }

    /// One-line description of the resulting order.
    pub fn subtitle(&self) -> &'static str {
        match self {
            QueueingMode::Priority => "High priority first",
            QueueingMode::ReversePriority => "Low priority first",
            QueueingMode::Fifo => "Oldest task first",
            QueueingMode::Lifo => "Newest task first",
            QueueingMode::Shuffle => "Random order",
        }
    }

    /// Builds the policy for this mode. `seed` only affects `Shuffle`.
    pub fn policy(&self, seed: Option<u64>) -> Box<dyn OrderingPolicy> {
        match self {
            QueueingMode::Priority => Box::new(Priority),
            QueueingMode::ReversePriority => Box::new(ReversePriority),
            QueueingMode::Fifo => Box::new(Fifo),
            QueueingMode::Lifo => Box::new(Lifo),
            QueueingMode::Shuffle => Box::new(Shuffle { seed }),
        }
    }
}

impl fmt::Display for QueueingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "priority" => Ok(QueueingMode::Priority),
            "reverse_priority" | "rev_priority" => Ok(QueueingMode::ReversePriority),
            "fifo" => Ok(QueueingMode::Fifo),
            "lifo" => Ok(QueueingMode::Lifo),
            "shuffle" => Ok(QueueingMode::Shuffle),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_str() {
        for mode in QueueingMode::ALL {
            assert_eq!(mode.as_str().parse::<QueueingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "rev-priority".parse::<QueueingMode>().unwrap(),
            QueueingMode::ReversePriority
        );
        assert_eq!(" FIFO ".parse::<QueueingMode>().unwrap(), QueueingMode::Fifo);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "round_robin".parse::<QueueingMode>().unwrap_err();
        assert!(matches!(err, Error::UnknownMode(ref s) if s == "round_robin"));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&QueueingMode::ReversePriority).unwrap();
        assert_eq!(json, "\"reverse_priority\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(QueueingMode::ReversePriority.display_name(), "Low First");
        assert_eq!(QueueingMode::Lifo.subtitle(), "Newest task first");
    }

    #[test]
    fn test_policy_matches_mode() {
        assert_eq!(QueueingMode::Fifo.policy(None).name(), "FIFO");
        assert_eq!(QueueingMode::Shuffle.policy(Some(3)).name(), "SHUFFLE");
    }
}
