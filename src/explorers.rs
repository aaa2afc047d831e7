//! Selection of the right [`FileExplorer`] for a platform.

use crate::command::CommandBuilder;
use crate::config::ExplorerConfig;
use crate::errors::Result;
use crate::explorer::{FileExplorer, SystemExplorer};
use crate::fs::{FileSystem, RealFileSystem};
use crate::platform::OsFamily;
use crate::process::{ProcessRunner, StdProcessRunner};
use crate::resilient::ResilientExplorer;
use std::path::Path;

/// Explorer for platforms without a known file manager.
///
/// Every operation reports `false` without building or spawning anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExplorer;

impl FileExplorer for NullExplorer {
    fn open(&self) -> Result<bool> {
        Ok(false)
    }

    fn open_directory(&self, _path: &Path) -> Result<bool> {
        Ok(false)
    }

    fn open_and_select(&self, _path: &Path) -> Result<bool> {
        Ok(false)
    }
}

/// Explorer for `os` with the default configuration.
///
/// ```no_run
/// use file_goodies::{explorers, OsFamily};
///
/// let explorer = explorers::resilient(explorers::get(OsFamily::current()));
/// explorer.open_directory(std::path::Path::new("."));
/// ```
pub fn get(os: OsFamily) -> Box<dyn FileExplorer> {
    get_with(os, ExplorerConfig::default(), StdProcessRunner, RealFileSystem)
}

/// Explorer for `os` built from the given collaborators.
pub fn get_with<R, F>(
    os: OsFamily,
    config: ExplorerConfig,
    runner: R,
    fs: F,
) -> Box<dyn FileExplorer>
where
    R: ProcessRunner + 'static,
    F: FileSystem + 'static,
{
    match CommandBuilder::for_family(os) {
        Some(builder) => {
            log::debug!("using {os} file explorer");
            Box::new(SystemExplorer::with_parts(builder, config, runner, fs))
        }
        None => {
            log::debug!("no file explorer known for {os}");
            Box::new(NullExplorer)
        }
    }
}

/// Wraps `explorer` so that its failures read as `false`.
pub fn resilient<E: FileExplorer>(explorer: E) -> ResilientExplorer<E> {
    ResilientExplorer::new(explorer)
}
