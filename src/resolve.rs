use std::fs;
use std::path::{Component, Path, PathBuf};

/// A user-supplied path made absolute and classified once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPath {
    File(PathBuf),
    Directory(PathBuf),
    Invalid(PathBuf),
}

impl InputPath {
    /// Makes `raw` absolute without resolving symlinks and classifies it.
    pub fn resolve(raw: &str) -> Self {
        let absolute = match std::path::absolute(raw) {
            Ok(path) => normalize(&path),
            Err(err) => {
                log::debug!("cannot make '{raw}' absolute: {err}");
                return InputPath::Invalid(PathBuf::from(raw));
            }
        };

        match fs::metadata(&absolute) {
            Ok(metadata) if metadata.is_dir() => InputPath::Directory(absolute),
            Ok(metadata) if metadata.is_file() => InputPath::File(absolute),
            _ => InputPath::Invalid(absolute),
        }
    }
}

/// Lexically removes `.` and folds `..` into its parent. `..` above the root is dropped.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Display name of a directory: its last component, or the whole path for roots.
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Literal substring patterns; a path is excluded when any of them occurs
/// anywhere in its string form.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<String>,
}

impl ExcludeSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let text = path.to_string_lossy();
        self.patterns.iter().any(|pattern| text.contains(pattern.as_str()))
    }
}
