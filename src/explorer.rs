//! The native file explorer launcher.

use crate::command::CommandBuilder;
use crate::config::ExplorerConfig;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::models::{CommandLine, ExplorerIntent};
use crate::process::{ProcessRunner, StdProcessRunner};
use std::path::Path;
use std::time::Duration;

/// The GUI file explorer provided by the OS.
///
/// `Ok(true)` means the explorer was launched, `Ok(false)` that there was
/// nothing to open. Errors are reserved for an explorer that could not be
/// started or waited on; wrap in [`crate::ResilientExplorer`] to fold them
/// into `false`.
pub trait FileExplorer: Send + Sync {
    /// Opens the explorer at its default location.
    ///
    /// On Linux this needs `nautilus` installed.
    fn open(&self) -> Result<bool>;

    /// Opens the explorer showing `path`, which must be an existing directory.
    fn open_directory(&self, path: &Path) -> Result<bool>;

    /// Opens the explorer with `path` selected. `path` must exist.
    ///
    /// On Linux this needs `nautilus` installed.
    fn open_and_select(&self, path: &Path) -> Result<bool>;

    fn launch(&self, intent: &ExplorerIntent<'_>) -> Result<bool> {
        match intent {
            ExplorerIntent::OpenBrowser => self.open(),
            ExplorerIntent::OpenDirectory(path) => self.open_directory(path),
            ExplorerIntent::OpenAndSelect(path) => self.open_and_select(path),
        }
    }
}

impl<E: FileExplorer + ?Sized> FileExplorer for Box<E> {
    fn open(&self) -> Result<bool> {
        (**self).open()
    }

    fn open_directory(&self, path: &Path) -> Result<bool> {
        (**self).open_directory(path)
    }

    fn open_and_select(&self, path: &Path) -> Result<bool> {
        (**self).open_and_select(path)
    }

    fn launch(&self, intent: &ExplorerIntent<'_>) -> Result<bool> {
        (**self).launch(intent)
    }
}

/// Launches the OS explorer through a [`CommandBuilder`].
#[derive(Debug, Clone)]
pub struct SystemExplorer<R = StdProcessRunner, F = RealFileSystem> {
    builder: CommandBuilder,
    runner: R,
    fs: F,
    wait: Duration,
}

impl SystemExplorer {
    pub fn new(builder: CommandBuilder) -> Self {
        Self::with_parts(builder, ExplorerConfig::default(), StdProcessRunner, RealFileSystem)
    }
}

impl<R: ProcessRunner, F: FileSystem> SystemExplorer<R, F> {
    pub fn with_parts(builder: CommandBuilder, config: ExplorerConfig, runner: R, fs: F) -> Self {
        Self {
            builder,
            runner,
            fs,
            wait: config.wait,
        }
    }

    pub fn builder(&self) -> &CommandBuilder {
        &self.builder
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    fn execute(&self, command: CommandLine) -> Result<bool> {
        log::debug!("launching explorer: '{}'", command);
        self.runner.launch(&command, self.wait)?;
        Ok(true)
    }
}

impl<R: ProcessRunner, F: FileSystem> FileExplorer for SystemExplorer<R, F> {
    fn open(&self) -> Result<bool> {
        self.execute(self.builder.build_open())
    }

    fn open_directory(&self, path: &Path) -> Result<bool> {
        if !self.fs.exists(path) || !self.fs.is_dir(path) {
            log::debug!("not opening {}: not an existing directory", path.display());
            return Ok(false);
        }

        let command = self.builder.build_open_directory(&self.fs.absolute(path));
        self.execute(command)
    }

    fn open_and_select(&self, path: &Path) -> Result<bool> {
        if !self.fs.exists(path) {
            log::debug!("not selecting {}: path does not exist", path.display());
            return Ok(false);
        }

        let command = self.builder.build_open_and_select(&self.fs.absolute(path));
        self.execute(command)
    }
}
