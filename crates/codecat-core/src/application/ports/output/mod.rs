//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `codecat-adapters` crate provides implementations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::CollectionFilter;
use crate::error::CollectResult;

/// Port for enumerating and reading a source tree.
///
/// Implemented by:
/// - `codecat_adapters::filesystem::LocalFilesystem` (production)
/// - `codecat_adapters::filesystem::MemoryFilesystem` (testing)
pub trait SourceTree: Send + Sync {
    /// Enumerate qualifying files under `root`, in traversal order.
    ///
    /// The filter is consulted *before* descent: a directory whose name is
    /// excluded is never entered, so nothing under it can appear in the
    /// result. A root that does not exist or is not a directory yields an
    /// empty list rather than an error; individual unreadable entries
    /// encountered mid-walk are skipped.
    fn walk(&self, root: &Path, filter: &CollectionFilter) -> CollectResult<Vec<PathBuf>>;

    /// Read one file's entire content as text.
    ///
    /// Errors here are per-file and recoverable: the collect loop turns
    /// them into inline marker records instead of aborting.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Port for opening the output bundle.
///
/// Implemented by:
/// - `codecat_adapters::filesystem::LocalFilesystem` (production)
/// - `codecat_adapters::filesystem::MemoryFilesystem` (testing)
pub trait BundleSink: Send + Sync {
    /// Open `path` in truncate-and-write mode.
    ///
    /// Failure is fatal to the run. The returned writer is dropped (and so
    /// released) on every exit path of the caller.
    fn create(&self, path: &Path) -> CollectResult<Box<dyn Write>>;
}
