//! Concatenation of a directory's files into one labelled text blob.

use crate::resolve::ExcludeSet;
use crate::walker;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One aggregated file, labelled relative to the parent of the root so the
/// root directory's own name leads the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    pub relative_path: PathBuf,
    pub contents: String,
}

impl fmt::Display for FileBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file: {}\ncontents:\n{}",
            self.relative_path.display(),
            self.contents
        )
    }
}

/// File blocks in ascending path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedOutput {
    blocks: Vec<FileBlock>,
}

impl AggregatedOutput {
    pub fn blocks(&self) -> &[FileBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks joined by a blank line.
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Reads every file `walker::collect_files` yields under `root`. Files that
/// cannot be read are skipped with a warning; invalid UTF-8 is replaced.
pub fn aggregate(root: &Path, excludes: &ExcludeSet, recursive: bool) -> AggregatedOutput {
    let base = root.parent().unwrap_or(root);
    let mut blocks = Vec::new();

    for file in walker::collect_files(root, excludes, recursive) {
        let bytes = match fs::read(&file) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("Could not read file '{}': {err}", file.display());
                continue;
            }
        };
        let relative_path = file.strip_prefix(base).unwrap_or(&file).to_path_buf();
        blocks.push(FileBlock {
            relative_path,
            contents: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    AggregatedOutput { blocks }
}
