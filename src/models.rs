use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// What the caller wants the file explorer to do.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExplorerIntent<'a> {
    OpenBrowser,
    OpenDirectory(&'a Path),
    OpenAndSelect(&'a Path),
}

impl ExplorerIntent<'_> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenBrowser => "open",
            Self::OpenDirectory(_) => "open-directory",
            Self::OpenAndSelect(_) => "open-and-select",
        }
    }
}

impl std::fmt::Display for ExplorerIntent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single command-line argument.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommandArg {
    Literal(String),
    Path(PathBuf),
}

impl CommandArg {
    pub fn as_os_str(&self) -> &OsStr {
        match self {
            Self::Literal(value) => OsStr::new(value),
            Self::Path(path) => path.as_os_str(),
        }
    }
}

/// OS-specific invocation of the file explorer.
///
/// Paths are kept as paths so they reach the child process untouched;
/// the `Display` form quotes them the way a shell user would type them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<CommandArg>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(CommandArg::Literal(value.into()));
        self
    }

    pub fn path_arg(mut self, path: &Path) -> Self {
        self.args.push(CommandArg::Path(path.to_path_buf()));
        self
    }

    /// Returns true when one of the literal arguments equals `flag`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args
            .iter()
            .any(|arg| matches!(arg, CommandArg::Literal(value) if value == flag))
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            match arg {
                CommandArg::Literal(value) => write!(f, " {value}")?,
                CommandArg::Path(path) => write!(f, " \"{}\"", path.display())?,
            }
        }
        Ok(())
    }
}
