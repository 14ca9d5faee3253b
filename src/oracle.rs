//! Confirmation oracles.
//!
//! An oracle decides, after each quantum, whether the task in service has
//! finished. Anything other than an affirmative answer means "not yet";
//! that is never an error.

use std::collections::{HashMap, VecDeque};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};
use crate::models::Task;

/// Answers "is this task complete?" once per elapsed quantum.
pub trait ConfirmationOracle {
    fn confirm(&mut self, task: &Task) -> Result<bool>;
}

impl<F> ConfirmationOracle for F
where
    F: FnMut(&Task) -> bool,
{
    fn confirm(&mut self, task: &Task) -> Result<bool> {
        Ok(self(task))
    }
}

/// Interactive oracle: prints a prompt and reads one line.
///
/// Only the exact answer `y` counts as complete.
#[derive(Debug)]
pub struct PromptOracle<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptOracle<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl PromptOracle<StdinLock<'static>, Stdout> {
    /// Prompts on stdout and reads from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConfirmationOracle for PromptOracle<R, W> {
    /// # Errors
    /// [`Error::OracleClosed`] when the input reaches end of stream.
    fn confirm(&mut self, task: &Task) -> Result<bool> {
        write!(self.output, "Task {} completed? (y/n)", task.name())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::OracleClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']) == "y")
    }
}

/// Scripted oracle with per-task answer queues.
///
/// Each consultation pops the next scripted answer for the task; once a
/// task's script is exhausted (or it has none) the default answer is used.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    answers: HashMap<String, VecDeque<bool>>,
    default: bool,
    consulted: Vec<String>,
}

impl ScriptedOracle {
    /// Creates an oracle that answers `default` for every task.
    pub fn new(default: bool) -> Self {
        Self {
            default,
            ..Default::default()
        }
    }

    /// Queues answers for `task`, consumed in order.
    pub fn with_answers(
        mut self,
        task: impl Into<String>,
        answers: impl IntoIterator<Item = bool>,
    ) -> Self {
        self.answers
            .entry(task.into())
            .or_default()
            .extend(answers);
        self
    }

    /// Task names in the order they were consulted.
    pub fn consulted(&self) -> &[String] {
        &self.consulted
    }
}

impl ConfirmationOracle for ScriptedOracle {
    fn confirm(&mut self, task: &Task) -> Result<bool> {
        self.consulted.push(task.name().to_string());
        let answer = self
            .answers
            .get_mut(task.name())
            .and_then(VecDeque::pop_front)
            .unwrap_or(self.default);
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> PromptOracle<Cursor<Vec<u8>>, Vec<u8>> {
        PromptOracle::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_exact_y() {
        let task = Task::new("task1", 1);
        let mut oracle = prompt("y\nn\nyes\nY\n\ny\r\n");

        assert!(oracle.confirm(&task).unwrap());
        assert!(!oracle.confirm(&task).unwrap());
        assert!(!oracle.confirm(&task).unwrap());
        assert!(!oracle.confirm(&task).unwrap());
        assert!(!oracle.confirm(&task).unwrap());
        assert!(oracle.confirm(&task).unwrap());
    }

    #[test]
    fn test_prompt_text() {
        let mut oracle = prompt("y\n");
        oracle.confirm(&Task::new("task3", 3)).unwrap();
        let (_, output) = oracle.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Task task3 completed? (y/n)");
    }

    #[test]
    fn test_prompt_eof() {
        let mut oracle = prompt("");
        let err = oracle.confirm(&Task::new("t", 0)).unwrap_err();
        assert!(matches!(err, Error::OracleClosed));
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let mut oracle = prompt("y");
        assert!(oracle.confirm(&Task::new("t", 0)).unwrap());
    }

    #[test]
    fn test_scripted_falls_back_to_default() {
        let a = Task::new("A", 1);
        let b = Task::new("B", 1);
        let mut oracle = ScriptedOracle::new(true).with_answers("A", [false]);

        assert!(!oracle.confirm(&a).unwrap());
        assert!(oracle.confirm(&a).unwrap());
        assert!(oracle.confirm(&b).unwrap());
        assert_eq!(oracle.consulted(), &["A", "A", "B"]);
    }

    #[test]
    fn test_closure_oracle() {
        let mut oracle = |t: &Task| t.priority() > 1;
        assert!(oracle.confirm(&Task::new("hi", 2)).unwrap());
        assert!(!oracle.confirm(&Task::new("lo", 1)).unwrap());
    }
}
