use std::path::Path;

/// A file name split into stem and extension at its last dot.
///
/// ```
/// use file_goodies::FileName;
///
/// let name = FileName::parse("path/to/TextFile.txt");
/// assert_eq!(name.stem, "TextFile");
/// assert_eq!(name.extension, "txt");
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct FileName {
    /// Name before the last dot; a name without a dot is all stem.
    pub stem: String,
    /// Extension without the dot; empty when there is none.
    pub extension: String,
}

impl FileName {
    pub fn parse(path: impl AsRef<Path>) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match name.rfind('.') {
            Some(pos) => Self {
                stem: name[..pos].to_string(),
                extension: name[pos + 1..].to_string(),
            },
            None => Self {
                stem: name,
                extension: String::new(),
            },
        }
    }

    pub fn has_extension(&self) -> bool {
        self.extension.chars().any(|c| !c.is_whitespace())
    }

    pub fn has_no_extension(&self) -> bool {
        !self.has_extension()
    }

    pub fn extension_opt(&self) -> Option<&str> {
        self.has_extension().then_some(self.extension.as_str())
    }
}
