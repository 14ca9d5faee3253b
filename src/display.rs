//! Console output for queues and dispatch progress.

use std::io::Write;

use crate::dispatch::DispatchObserver;
use crate::error::Result;
use crate::models::{Task, TaskQueue};

/// Writes task names, one per line.
pub fn write_queue<'a, W, I>(out: &mut W, tasks: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Task>,
{
    for task in tasks {
        writeln!(out, "{}", task.name())?;
    }
    Ok(())
}

/// Observer that prints completions and the remaining queue.
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DispatchObserver for ConsoleObserver<W> {
    fn on_completed(&mut self, task: &Task) -> Result<()> {
        writeln!(self.out, "Task {} completed", task.name())?;
        Ok(())
    }

    fn on_queue(&mut self, queue: &TaskQueue) -> Result<()> {
        write_queue(&mut self.out, queue.iter())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_queue_one_per_line() {
        let tasks = vec![Task::new("task1", 1), Task::new("task2", 2)];
        let mut out = Vec::new();
        write_queue(&mut out, &tasks).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "task1\ntask2\n");
    }

    #[test]
    fn test_console_observer() {
        let mut observer = ConsoleObserver::new(Vec::new());
        let queue = TaskQueue::from(vec![Task::new("B", 1)]);

        observer.on_completed(&Task::new("A", 1)).unwrap();
        observer.on_queue(&queue).unwrap();

        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert_eq!(text, "Task A completed\nB\n");
    }
}
