//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    io::{self, Write},
    path::{Component, Path, PathBuf},
    sync::{Arc, Mutex, RwLock},
};

use codecat_core::{
    application::ports::{BundleSink, SourceTree},
    domain::CollectionFilter,
    error::CollectResult,
};

/// In-memory filesystem for testing.
///
/// Holds a source tree (with per-path failure injection) and captures any
/// bundles written through it, readable back via [`MemoryFilesystem::output`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    // BTreeMap keeps the walk order deterministic, like the sorted real walk.
    files: BTreeMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    outputs: HashMap<PathBuf, Arc<Mutex<Vec<u8>>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable source file.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.insert(path.into(), content.into());
    }

    /// Make a file present in the tree but fail on read (permission-style).
    pub fn mark_unreadable(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.entry(path.clone()).or_default();
        inner.unreadable.insert(path);
    }

    /// Read back a bundle written through this filesystem.
    pub fn output(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let buffer = inner.outputs.get(path)?;
        let bytes = buffer.lock().ok()?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.clear();
        inner.unreadable.clear();
        inner.outputs.clear();
    }
}

impl SourceTree for MemoryFilesystem {
    fn walk(&self, root: &Path, filter: &CollectionFilter) -> CollectResult<Vec<PathBuf>> {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");

        Ok(inner
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| !descends_through_pruned(path, root, filter))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| filter.matches_file(n))
            })
            .cloned()
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");

        if inner.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied reading {}", path.display()),
            ));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

impl BundleSink for MemoryFilesystem {
    fn create(&self, path: &Path) -> CollectResult<Box<dyn Write>> {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");

        // truncate-and-write: a fresh buffer replaces any previous bundle
        let buffer = Arc::new(Mutex::new(Vec::new()));
        inner.outputs.insert(path.to_path_buf(), Arc::clone(&buffer));
        Ok(Box::new(MemoryWriter(buffer)))
    }
}

struct MemoryWriter(Arc<Mutex<Vec<u8>>>);

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("memory writer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `true` if reaching `path` from `root` passes through an excluded
/// directory. Mirrors the real walker, where pruning stops descent: the
/// root's own name is never checked.
fn descends_through_pruned(path: &Path, root: &Path, filter: &CollectionFilter) -> bool {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return false,
    };
    let mut components: Vec<Component<'_>> = relative.components().collect();
    // the last component is the file itself, not a directory
    components.pop();

    components.iter().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|name| filter.prunes_dir(name))
    })
}
