//! Test doubles shared by the unit tests.

use crate::errors::{GoodiesError, Result};
use crate::explorer::FileExplorer;
use crate::fs::FileSystem;
use crate::models::CommandLine;
use crate::process::ProcessRunner;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// In-memory file system: only the registered paths exist.
#[derive(Debug, Clone)]
pub struct FakeFileSystem {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    cwd: PathBuf,
    now: SystemTime,
}

impl Default for FakeFileSystem {
    fn default() -> Self {
        Self {
            files: HashSet::new(),
            dirs: HashSet::new(),
            cwd: PathBuf::from("/"),
            now: SystemTime::UNIX_EPOCH,
        }
    }
}

impl FakeFileSystem {
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn with_now(mut self, now: SystemTime) -> Self {
        self.now = now;
        self
    }
}

impl FileSystem for FakeFileSystem {
    fn now(&self) -> SystemTime {
        self.now
    }

    fn exists(&self, path: &Path) -> bool {
        let path = self.absolute(path);
        self.files.contains(&path) || self.dirs.contains(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(&self.absolute(path))
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum RunnerMode {
    #[default]
    Succeed,
    FailSpawn,
    Interrupt,
}

/// Runner that records every launch instead of spawning anything.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    mode: RunnerMode,
    launches: Mutex<Vec<(CommandLine, Duration)>>,
}

impl RecordingRunner {
    pub fn failing_spawn() -> Self {
        Self {
            mode: RunnerMode::FailSpawn,
            ..Self::default()
        }
    }

    pub fn interrupted() -> Self {
        Self {
            mode: RunnerMode::Interrupt,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.launches.lock().unwrap().len()
    }

    pub fn commands(&self) -> Vec<CommandLine> {
        self.launches.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.launches.lock().unwrap().iter().map(|(_, w)| *w).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn launch(&self, command: &CommandLine, wait: Duration) -> Result<()> {
        self.launches.lock().unwrap().push((command.clone(), wait));
        match self.mode {
            RunnerMode::Succeed => Ok(()),
            RunnerMode::FailSpawn => Err(GoodiesError::spawn(
                &command.program,
                io::Error::from(io::ErrorKind::NotFound),
            )),
            RunnerMode::Interrupt => Err(GoodiesError::interrupted(
                &command.program,
                io::Error::from(io::ErrorKind::Interrupted),
            )),
        }
    }
}

/// Explorer whose every operation panics, counting the calls.
#[derive(Debug, Default)]
pub struct PanickingExplorer {
    pub calls: AtomicUsize,
}

impl FileExplorer for PanickingExplorer {
    fn open(&self) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        panic!("explorer blew up");
    }

    fn open_directory(&self, _path: &Path) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        panic!("explorer blew up");
    }

    fn open_and_select(&self, _path: &Path) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        panic!("explorer blew up");
    }
}
