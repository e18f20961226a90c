//! Local filesystem adapter using std::fs and walkdir.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use codecat_core::{
    application::{
        ApplicationError,
        ports::{BundleSink, SourceTree},
    },
    domain::CollectionFilter,
    error::CollectResult,
};

/// Production filesystem implementation backed by `std::fs` + `walkdir`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceTree for LocalFilesystem {
    fn walk(&self, root: &Path, filter: &CollectionFilter) -> CollectResult<Vec<PathBuf>> {
        // Degenerate roots (missing, or a plain file) yield an empty run,
        // matching the "nothing found" contract rather than erroring.
        if !root.is_dir() {
            debug!(root = %root.display(), "Root is not a directory, nothing to walk");
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            // Pruning happens here, before descent: an excluded directory's
            // subtree is never entered at all. The root itself is exempt.
            .filter_entry(|entry| entry.depth() == 0 || !prunes(entry, filter));

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                // Unreadable entries mid-walk are skipped, not fatal.
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && matches(&entry, filter) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl BundleSink for LocalFilesystem {
    fn create(&self, path: &Path) -> CollectResult<Box<dyn Write>> {
        let file = File::create(path).map_err(|e| ApplicationError::SinkCreation {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn prunes(entry: &DirEntry, filter: &CollectionFilter) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| filter.prunes_dir(name))
}

fn matches(entry: &DirEntry, filter: &CollectionFilter) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| filter.matches_file(name))
}
