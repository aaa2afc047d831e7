//! Per-OS construction of file explorer command lines.

use crate::models::{CommandLine, ExplorerIntent};
use crate::platform::OsFamily;
use std::path::{Path, PathBuf};

const EXPLORER_EXE: &str = "explorer.exe";
const NAUTILUS: &str = "nautilus";
const XDG_OPEN: &str = "xdg-open";
const OPEN: &str = "open";
const FINDER: &str = "Finder";

/// Builds explorer command lines for exactly one OS family.
///
/// Every `build_*` method is pure: it reads the path it is given and
/// nothing else, so two calls with the same input yield equal commands.
/// Paths are expected to be absolute already; the launcher takes care of
/// that before calling in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommandBuilder {
    /// `explorer.exe` with `/root,` and `/select,` switches.
    Windows,
    /// `xdg-open` for directories, `nautilus` for the browser and selection.
    ///
    /// There is no file manager every distribution ships, so selecting a
    /// file requires nautilus to be installed.
    Linux,
    /// The `open` utility, forced through Finder when selecting.
    MacOs { home: PathBuf },
}

impl CommandBuilder {
    /// Builder for `family`, or `None` when the family has no known explorer.
    pub fn for_family(family: OsFamily) -> Option<Self> {
        match family {
            OsFamily::Windows => Some(Self::Windows),
            OsFamily::Linux => Some(Self::Linux),
            OsFamily::MacOs => Some(Self::mac_os()),
            OsFamily::Other => None,
        }
    }

    /// macOS builder rooted at the current user's home directory.
    pub fn mac_os() -> Self {
        Self::MacOs {
            home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")),
        }
    }

    pub fn family(&self) -> OsFamily {
        match self {
            Self::Windows => OsFamily::Windows,
            Self::Linux => OsFamily::Linux,
            Self::MacOs { .. } => OsFamily::MacOs,
        }
    }

    pub fn build_open(&self) -> CommandLine {
        match self {
            Self::Windows => CommandLine::new(EXPLORER_EXE),
            Self::Linux => CommandLine::new(NAUTILUS),
            Self::MacOs { home } => CommandLine::new(OPEN).path_arg(home),
        }
    }

    pub fn build_open_directory(&self, path: &Path) -> CommandLine {
        match self {
            Self::Windows => CommandLine::new(EXPLORER_EXE).arg("/root,").path_arg(path),
            Self::Linux => CommandLine::new(XDG_OPEN).path_arg(path),
            Self::MacOs { .. } => CommandLine::new(OPEN).path_arg(path),
        }
    }

    pub fn build_open_and_select(&self, path: &Path) -> CommandLine {
        match self {
            Self::Windows => CommandLine::new(EXPLORER_EXE).arg("/select,").path_arg(path),
            Self::Linux => CommandLine::new(NAUTILUS).path_arg(path),
            Self::MacOs { .. } => CommandLine::new(OPEN).arg("-a").arg(FINDER).path_arg(path),
        }
    }

    /// Builds the command for an intent whose path is already absolute.
    pub fn build(&self, intent: &ExplorerIntent<'_>) -> CommandLine {
        match intent {
            ExplorerIntent::OpenBrowser => self.build_open(),
            ExplorerIntent::OpenDirectory(path) => self.build_open_directory(path),
            ExplorerIntent::OpenAndSelect(path) => self.build_open_and_select(path),
        }
    }
}
