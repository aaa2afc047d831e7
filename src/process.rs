//! Spawning explorer processes with a bounded wait.

use crate::errors::{GoodiesError, Result};
use crate::models::CommandLine;
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Process boundary for the launcher.
pub trait ProcessRunner: Send + Sync {
    /// Spawns `command` and blocks for at most `wait`.
    ///
    /// Returns once the child exits or the deadline passes, whichever
    /// comes first. The child is never killed: explorer windows are
    /// expected to outlive the call. A child still running at the deadline
    /// is not reaped either, so on Unix it lingers as a zombie once its
    /// window closes, until the host process exits.
    ///
    /// A `wait` too large to form a deadline waits for the child to exit.
    fn launch(&self, command: &CommandLine, wait: Duration) -> Result<()>;
}

/// Runner backed by `std::process::Command`.
///
/// The child inherits environment, working directory and stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdProcessRunner;

impl ProcessRunner for StdProcessRunner {
    fn launch(&self, command: &CommandLine, wait: Duration) -> Result<()> {
        let mut child = Command::new(&command.program)
            .args(command.args.iter().map(|arg| arg.as_os_str()))
            .spawn()
            .map_err(|err| GoodiesError::spawn(&command.program, err))?;

        let deadline = Instant::now().checked_add(wait);
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    log::debug!("{} exited early with {}", command.program, status);
                    return Ok(());
                }
                Ok(None) => match deadline {
                    Some(deadline) => {
                        let now = Instant::now();
                        if now >= deadline {
                            return Ok(());
                        }
                        thread::sleep(POLL_INTERVAL.min(deadline - now));
                    }
                    None => thread::sleep(POLL_INTERVAL),
                },
                Err(err) => return Err(GoodiesError::interrupted(&command.program, err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let command = CommandLine::new("file-goodies-no-such-explorer-binary").arg("x");
        let err = StdProcessRunner
            .launch(&command, Duration::from_millis(10))
            .unwrap_err();
        assert!(matches!(
            err,
            GoodiesError::Spawn(ref program, _) if program == "file-goodies-no-such-explorer-binary"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn long_running_child_returns_after_the_wait() {
        let command = CommandLine::new("sleep").arg("5");
        let started = Instant::now();
        StdProcessRunner.launch(&command, Duration::from_millis(100)).unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn unbounded_wait_returns_once_the_child_exits() {
        let command = CommandLine::new("true");
        assert!(StdProcessRunner.launch(&command, Duration::MAX).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn short_lived_child_returns_before_the_wait() {
        let command = CommandLine::new("true");
        let started = Instant::now();
        StdProcessRunner.launch(&command, Duration::from_secs(10)).unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
