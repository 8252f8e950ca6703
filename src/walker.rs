//! Recursive discovery of the files to tidy.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::config::TidyConfig;
use crate::error::{Result, TidyError};

type EntryFilter = fn(&DirEntry) -> bool;

/// Lazy depth-first iterator over the files below a root directory.
///
/// Entries named in [`crate::config::EXCLUDED_NAMES`] are skipped, and
/// excluded directories are never entered. Symlinks are neither followed nor
/// yielded, so the walk cannot loop.
pub struct PathWalker {
    root: PathBuf,
    inner: FilterEntry<walkdir::IntoIter, EntryFilter>,
}

impl PathWalker {
    /// Start a walk rooted at `root`.
    pub fn new(root: &Path) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(is_visitable as EntryFilter);

        Self {
            root: root.to_path_buf(),
            inner,
        }
    }
}

/// The root is always visited, whatever its name.
fn is_visitable(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !TidyConfig::is_excluded(&entry.file_name().to_string_lossy())
}

impl Iterator for PathWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(TidyError::Walk { path, source: err }));
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if file_type.is_symlink() {
                tracing::debug!(path = %entry.path().display(), "Skipping symlink");
                continue;
            }

            return Some(Ok(entry.into_path()));
        }
    }
}

/// Iterate over the files below `root`.
pub fn iter_filepaths(root: &Path) -> PathWalker {
    PathWalker::new(root)
}
