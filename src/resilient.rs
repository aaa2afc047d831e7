use crate::errors::Result;
use crate::explorer::FileExplorer;
use crate::models::ExplorerIntent;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Wraps a [`FileExplorer`] so that nothing it does can fail the caller.
///
/// Errors and panics of the inner explorer are logged and reported as
/// `false`. Use [`crate::explorers::resilient`] to build one.
#[derive(Debug, Clone)]
pub struct ResilientExplorer<E> {
    inner: E,
}

impl<E: FileExplorer> ResilientExplorer<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }

    pub fn open(&self) -> bool {
        guard("open", || self.inner.open())
    }

    pub fn open_directory(&self, path: &Path) -> bool {
        guard("open-directory", || self.inner.open_directory(path))
    }

    pub fn open_and_select(&self, path: &Path) -> bool {
        guard("open-and-select", || self.inner.open_and_select(path))
    }

    pub fn launch(&self, intent: &ExplorerIntent<'_>) -> bool {
        guard(intent.as_str(), || self.inner.launch(intent))
    }
}

fn guard(operation: &str, call: impl FnOnce() -> Result<bool>) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(opened)) => opened,
        Ok(Err(err)) => {
            log::warn!("explorer {operation} failed: {err}");
            false
        }
        Err(_) => {
            log::warn!("explorer {operation} panicked");
            false
        }
    }
}

impl<E: FileExplorer> FileExplorer for ResilientExplorer<E> {
    fn open(&self) -> Result<bool> {
        Ok(ResilientExplorer::open(self))
    }

    fn open_directory(&self, path: &Path) -> Result<bool> {
        Ok(ResilientExplorer::open_directory(self, path))
    }

    fn open_and_select(&self, path: &Path) -> Result<bool> {
        Ok(ResilientExplorer::open_and_select(self, path))
    }

    fn launch(&self, intent: &ExplorerIntent<'_>) -> Result<bool> {
        Ok(ResilientExplorer::launch(self, intent))
    }
}
