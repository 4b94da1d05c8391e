use crate::resolve::ExcludeSet;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects the regular files under `root` that survive `excludes`, sorted
/// by path. With `recursive` off only the files directly inside `root` are
/// considered.
///
/// Hidden files and ignore files get no special treatment; every file is a
/// candidate unless an exclude pattern drops it. Entries that cannot be
/// read are logged and skipped.
pub fn collect_files(root: &Path, excludes: &ExcludeSet, recursive: bool) -> Vec<PathBuf> {
    let mut walk_builder = WalkBuilder::new(root);
    walk_builder.standard_filters(false).follow_links(false);
    if !recursive {
        walk_builder.max_depth(Some(1));
    }

    let mut files = Vec::new();
    for result in walk_builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry under '{}': {err}", root.display());
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        // Symlinks to files count as files; directories never do.
        if !path.is_file() {
            continue;
        }
        if excludes.is_excluded(path) {
            log::debug!("excluded {}", path.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    files
}
