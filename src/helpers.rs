//! Path and extension helpers that don't need a running explorer.

use crate::fs::FileSystem;
use crate::names::FileName;
use crate::platform::OsFamily;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Prefix used by [`shortened_file_path_default`] for hidden ancestors.
pub const DEFAULT_SHORTEN_PREFIX: &str = "...";

/// Word inserted into names produced by [`deprecate_file`].
pub const DEPRECATED_MARKER: &str = "_old";

const DEPRECATED_SUFFIX_SPACE: u32 = 100_000;

const WINDOWS_EXECUTABLES: &[&str] = &[
    "exe", "bat", "bin", "cmd", "com", "cpl", "gadget", "ins", "inx", "isu", "job", "jse", "lnk",
    "msc", "msi", "msp", "mst", "paf", "pif", "ps1", "reg", "rgs", "scr", "sct", "shb", "shs",
    "u3p", "vb", "vbe", "vbs", "vbscript", "ws", "wsf", "wsh",
];
const LINUX_EXECUTABLES: &[&str] = &["bin", "csh", "ksh", "out", "run", "deb", "sh", "rpm"];
const MAC_EXECUTABLES: &[&str] = &["action", "app", "bin", "command", "csh", "osx", "workflow"];

/// Extensions (without dot, lowercase) that `os` treats as executable.
pub fn executable_extensions(os: OsFamily) -> &'static [&'static str] {
    match os {
        OsFamily::Windows => WINDOWS_EXECUTABLES,
        OsFamily::Linux => LINUX_EXECUTABLES,
        OsFamily::MacOs => MAC_EXECUTABLES,
        OsFamily::Other => &[],
    }
}

/// Checks by extension alone whether `path` is an executable on `os`.
///
/// Directories and names without an extension are never executable.
pub fn is_os_executable(fs: &dyn FileSystem, path: &Path, os: OsFamily) -> bool {
    if fs.is_dir(path) {
        return false;
    }

    let name = FileName::parse(path);
    match name.extension_opt() {
        Some(extension) => executable_extensions(os)
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(extension)),
        None => false,
    }
}

pub fn is_not_os_executable(fs: &dyn FileSystem, path: &Path, os: OsFamily) -> bool {
    !is_os_executable(fs, path, os)
}

/// Returns true when `path` is syntactically acceptable as a path on `os`.
pub fn has_valid_path(path: &str, os: OsFamily) -> bool {
    if path.is_empty() || path.contains('\0') {
        return false;
    }
    if !os.is_windows() {
        return true;
    }

    // A drive letter ("C:") may only appear at the very start.
    let body = match path.as_bytes() {
        [drive, b':', ..] if drive.is_ascii_alphabetic() => &path[2..],
        _ => path,
    };
    !body
        .chars()
        .any(|c| c.is_control() || matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*'))
}

pub fn has_not_valid_path(path: &str, os: OsFamily) -> bool {
    !has_valid_path(path, os)
}

/// Renders `path` as its file name plus at most `max_back` parent names.
///
/// When ancestors are left out, `prefix` stands in for them:
///
/// ```
/// use file_goodies::shortened_file_path;
/// use std::path::Path;
///
/// let path = Path::new("users/user0/documents/Plans.docx");
/// assert_eq!(shortened_file_path(path, "[HOME]", '/', 1), "[HOME]/documents/Plans.docx");
/// ```
pub fn shortened_file_path(path: &Path, prefix: &str, separator: char, max_back: usize) -> String {
    let mut parts: Vec<String> = vec![display_name(path)];

    let mut parent = named_parent(path);
    let mut remaining = max_back;
    while remaining > 0 {
        let Some(dir) = parent else { break };
        parts.push(display_name(dir));
        parent = named_parent(dir);
        remaining -= 1;
    }

    if parent.is_some() {
        parts.push(prefix.to_string());
    }

    parts.reverse();
    parts.join(&separator.to_string())
}

/// [`shortened_file_path`] with `"..."` and the platform separator.
pub fn shortened_file_path_default(path: &Path, max_back: usize) -> String {
    shortened_file_path(path, DEFAULT_SHORTEN_PREFIX, MAIN_SEPARATOR, max_back)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// `Path::parent` yields "" for single relative components and the root for
// absolute ones; neither has a name worth showing.
fn named_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| parent.file_name().is_some())
}

/// Picks a fresh sibling name for a file that has to be moved aside.
///
/// `dir/report.txt` becomes `dir/report_old<n>.txt`, where `n` is a
/// five-digit number not yet taken in `dir`. Returns `None` for
/// directories or when every candidate exists.
pub fn deprecate_file(fs: &dyn FileSystem, path: &Path) -> Option<PathBuf> {
    if fs.is_dir(path) {
        return None;
    }

    let name = FileName::parse(path);
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let seed = DateTime::<Utc>::from(fs.now()).timestamp_subsec_micros() % DEPRECATED_SUFFIX_SPACE;

    (0..DEPRECATED_SUFFIX_SPACE)
        .map(|offset| (seed + offset) % DEPRECATED_SUFFIX_SPACE)
        .map(|suffix| dir.join(deprecated_name(&name, suffix)))
        .find(|candidate| !fs.exists(candidate))
}

fn deprecated_name(name: &FileName, suffix: u32) -> String {
    if name.has_extension() {
        format!("{}{DEPRECATED_MARKER}{suffix:05}.{}", name.stem, name.extension)
    } else {
        format!("{}{DEPRECATED_MARKER}{suffix:05}", name.stem)
    }
}
