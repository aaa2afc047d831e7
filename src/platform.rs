//! Operating system family detection.

/// Operating system family the explorer and the executable table care about.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl OsFamily {
    /// Family of the target this crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Classifies an OS name such as `"Windows 10"`, `"Mac OS X"`, `"Linux"`
    /// or one of the `std::env::consts::OS` values.
    pub fn from_os_name(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        if name.starts_with("windows") {
            Self::Windows
        } else if name.starts_with("linux") {
            Self::Linux
        } else if name.starts_with("mac") || name.starts_with("darwin") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }

    pub fn is_linux(self) -> bool {
        self == Self::Linux
    }

    pub fn is_mac(self) -> bool {
        self == Self::MacOs
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
