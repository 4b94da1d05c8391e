//! ASCII rendering of a directory tree.
//!
//! [`TreeLines`] walks depth-first and yields one line per entry, listing a
//! directory only when the walk reaches it. Within a level, subdirectories
//! come before files and each group is ordered case-insensitively.

use crate::resolve::{display_name, ExcludeSet};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

#[derive(Debug)]
struct TreeEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    descend: bool,
}

impl TreeEntry {
    fn sort_key(&self) -> (bool, String) {
        (!self.is_dir, self.name.to_lowercase())
    }
}

fn compare_entries(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    a.sort_key()
        .cmp(&b.sort_key())
        .then_with(|| a.name.cmp(&b.name))
}

struct Level {
    prefix: String,
    entries: std::iter::Peekable<vec::IntoIter<TreeEntry>>,
}

/// Lazy, pre-order sequence of tree lines below a directory. The root's own
/// name is not part of the sequence; see [`render_tree`].
pub struct TreeLines<'a> {
    excludes: &'a ExcludeSet,
    stack: Vec<Level>,
}

impl<'a> TreeLines<'a> {
    pub fn new(root: &Path, excludes: &'a ExcludeSet) -> Self {
        let mut lines = Self {
            excludes,
            stack: Vec::new(),
        };
        lines.push_level(root, String::new());
        lines
    }

    fn push_level(&mut self, dir: &Path, prefix: String) {
        let entries = list_children(dir, self.excludes);
        self.stack.push(Level {
            prefix,
            entries: entries.into_iter().peekable(),
        });
    }
}

impl Iterator for TreeLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let level = self.stack.last_mut()?;
            let Some(entry) = level.entries.next() else {
                self.stack.pop();
                continue;
            };

            let is_last = level.entries.peek().is_none();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let line = format!("{}{}{}", level.prefix, connector, entry.name);

            if entry.descend {
                let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
                let child_prefix = format!("{}{}", level.prefix, indent);
                self.push_level(&entry.path, child_prefix);
            }
            return Some(line);
        }
    }
}

fn list_children(dir: &Path, excludes: &ExcludeSet) -> Vec<TreeEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            log::warn!("Could not list directory '{}': {err}", dir.display());
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Could not read entry in '{}': {err}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        if excludes.is_excluded(&path) {
            log::debug!("excluded {}", path.display());
            continue;
        }

        // Symlinked directories are listed as directories but never entered.
        let is_symlink = entry.file_type().map_or(false, |ft| ft.is_symlink());
        let is_dir = path.is_dir();
        entries.push(TreeEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            descend: is_dir && !is_symlink,
            is_dir,
            path,
        });
    }

    entries.sort_by(compare_entries);
    entries
}

/// Renders the full tree: the root's name on the first line, then its contents.
pub fn render_tree(root: &Path, excludes: &ExcludeSet) -> String {
    let mut output = display_name(root);
    for line in TreeLines::new(root, excludes) {
        output.push('\n');
        output.push_str(&line);
    }
    output
}
