//! Small cross-platform helpers for desktop file operations.
//! The centrepiece is [`FileExplorer`]: open the OS file browser, a folder
//! in it, or a file highlighted inside its folder. The remaining helpers
//! classify, validate, shorten and rename paths without side effects.

pub mod command;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod explorers;
pub mod fs;
pub mod helpers;
pub mod models;
pub mod names;
pub mod platform;
pub mod process;
pub mod resilient;

#[cfg(test)]
mod testing;

pub use command::CommandBuilder;
pub use config::{ExplorerConfig, DEFAULT_WAIT, WAIT_ENV_VAR};
pub use errors::{GoodiesError, Result};
pub use explorer::{FileExplorer, SystemExplorer};
pub use explorers::NullExplorer;
pub use fs::{FileSystem, RealFileSystem};
pub use helpers::{
    deprecate_file,
    executable_extensions,
    has_not_valid_path,
    has_valid_path,
    is_not_os_executable,
    is_os_executable,
    shortened_file_path,
    shortened_file_path_default,
    DEFAULT_SHORTEN_PREFIX,
    DEPRECATED_MARKER,
};
pub use models::{CommandArg, CommandLine, ExplorerIntent};
pub use names::FileName;
pub use platform::OsFamily;
pub use process::{ProcessRunner, StdProcessRunner};
pub use resilient::ResilientExplorer;

/// Re-export a small stable API surface for applications.
pub mod prelude {
    pub use crate::{
        errors::{GoodiesError, Result},
        explorer::FileExplorer,
        explorers,
        fs::{FileSystem, RealFileSystem},
        helpers::*,
        models::*,
        names::FileName,
        platform::OsFamily,
        resilient::ResilientExplorer,
    };
}
