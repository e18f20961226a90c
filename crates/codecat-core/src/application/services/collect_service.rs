//! Collect Service - main application orchestrator.
//!
//! This service coordinates the entire collection workflow:
//! 1. Open the output bundle
//! 2. Walk the source tree (pruned, filtered)
//! 3. Read each qualifying file and append its record
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{BundleSink, SourceTree},
    },
    domain::{CollectionFilter, Record},
    error::CollectResult,
};

/// Counts for one finished run, for the completion summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectReport {
    /// Files whose content made it into the bundle.
    pub collected: usize,
    /// Files that produced an inline read-error record instead.
    pub failed: usize,
}

impl CollectReport {
    /// Total records written, content and error alike.
    pub fn total(&self) -> usize {
        self.collected + self.failed
    }
}

/// Main collection service.
///
/// Orchestrates the walk-read-append workflow over the injected adapters.
pub struct CollectService {
    source: Box<dyn SourceTree>,
    sink: Box<dyn BundleSink>,
    filter: CollectionFilter,
}

impl CollectService {
    /// Create a new collect service with the given adapters and the
    /// default filter.
    pub fn new(source: Box<dyn SourceTree>, sink: Box<dyn BundleSink>) -> Self {
        Self::with_filter(source, sink, CollectionFilter::default())
    }

    /// Create a collect service with a custom filter.
    pub fn with_filter(
        source: Box<dyn SourceTree>,
        sink: Box<dyn BundleSink>,
        filter: CollectionFilter,
    ) -> Self {
        Self {
            source,
            sink,
            filter,
        }
    }

    /// Bundle every qualifying file under `root` into `output`.
    ///
    /// This is the main use case. `output` is created or truncated up
    /// front; records are appended in traversal order. A file that cannot
    /// be read does not abort the run - it contributes an inline error
    /// record and the loop continues. Failure to create or write the
    /// output itself is fatal and propagates.
    ///
    /// If the process dies mid-run the output is left partial; there is no
    /// atomicity guarantee.
    #[instrument(skip_all, fields(root = %root.display(), output = %output.display()))]
    pub fn collect(&self, root: &Path, output: &Path) -> CollectResult<CollectReport> {
        info!("Collecting source files");

        // Fatal if this fails; dropped on every exit path below.
        let mut sink = self.sink.create(output)?;

        let files = self.source.walk(root, &self.filter)?;
        debug!(candidates = files.len(), "Walk complete");

        let mut report = CollectReport::default();
        for path in files {
            let record = match self.source.read_to_string(&path) {
                Ok(text) => {
                    report.collected += 1;
                    Record::content(path, text)
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Read failed, recording inline");
                    report.failed += 1;
                    Record::read_error(path, e.to_string())
                }
            };

            sink.write_all(record.render().as_bytes())
                .map_err(|e| sink_write_error(output, e))?;
        }

        sink.flush().map_err(|e| sink_write_error(output, e))?;

        info!(
            collected = report.collected,
            failed = report.failed,
            "Collection complete"
        );
        Ok(report)
    }

    /// The filter this service walks with.
    pub fn filter(&self) -> &CollectionFilter {
        &self.filter
    }
}

fn sink_write_error(output: &Path, e: std::io::Error) -> crate::error::CollectError {
    ApplicationError::SinkWrite {
        path: output.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::CollectError;

    // Minimal hand-rolled fakes; the full-fidelity doubles live in
    // codecat-adapters (MemoryFilesystem).

    struct FakeTree {
        files: BTreeMap<PathBuf, Result<String, io::ErrorKind>>,
    }

    impl FakeTree {
        fn new() -> Self {
            Self {
                files: BTreeMap::new(),
            }
        }

        fn file(mut self, path: &str, content: &str) -> Self {
            self.files.insert(path.into(), Ok(content.into()));
            self
        }

        fn unreadable(mut self, path: &str) -> Self {
            self.files
                .insert(path.into(), Err(io::ErrorKind::PermissionDenied));
            self
        }
    }

    impl SourceTree for FakeTree {
        fn walk(&self, root: &Path, filter: &CollectionFilter) -> CollectResult<Vec<PathBuf>> {
            Ok(self
                .files
                .keys()
                .filter(|p| p.starts_with(root))
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| filter.matches_file(n))
                })
                .cloned()
                .collect())
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            match self.files.get(path) {
                Some(Ok(content)) => Ok(content.clone()),
                Some(Err(kind)) => Err(io::Error::from(*kind)),
                None => Err(io::Error::from(io::ErrorKind::NotFound)),
            }
        }
    }

    #[derive(Clone, Default)]
    struct FakeSink {
        buffer: Arc<Mutex<Vec<u8>>>,
        refuse: bool,
    }

    impl FakeSink {
        fn refusing() -> Self {
            Self {
                refuse: true,
                ..Self::default()
            }
        }

        fn contents(&self) -> String {
            String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
        }
    }

    struct FakeSinkWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for FakeSinkWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl BundleSink for FakeSink {
        fn create(&self, path: &Path) -> CollectResult<Box<dyn Write>> {
            if self.refuse {
                return Err(ApplicationError::SinkCreation {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into());
            }
            // truncate-and-write semantics
            self.buffer.lock().unwrap().clear();
            Ok(Box::new(FakeSinkWriter(Arc::clone(&self.buffer))))
        }
    }

    fn service(tree: FakeTree, sink: FakeSink) -> CollectService {
        CollectService::new(Box::new(tree), Box::new(sink))
    }

    #[test]
    fn collects_matching_files_in_walk_order() {
        let tree = FakeTree::new()
            .file("src/a/Foo.cs", "class Foo {}")
            .file("src/b/widget.dart", "void main(){}")
            .file("src/readme.md", "skip me");
        let sink = FakeSink::default();

        let report = service(tree, sink.clone())
            .collect(Path::new("src"), Path::new("all_code.txt"))
            .unwrap();

        assert_eq!(report.collected, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(
            sink.contents(),
            "// === Arquivo: src/a/Foo.cs ===\nclass Foo {}\n\n\
             // === Arquivo: src/b/widget.dart ===\nvoid main(){}\n\n"
        );
    }

    #[test]
    fn read_failure_becomes_inline_record_and_run_continues() {
        let tree = FakeTree::new()
            .unreadable("src/locked.cs")
            .file("src/ok.cs", "ok");
        let sink = FakeSink::default();

        let report = service(tree, sink.clone())
            .collect(Path::new("src"), Path::new("out.txt"))
            .unwrap();

        assert_eq!(report.collected, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), 2);

        let bundle = sink.contents();
        assert!(bundle.contains("// ERRO AO LER src/locked.cs:"));
        // the later file still made it in
        assert!(bundle.contains("// === Arquivo: src/ok.cs ===\nok\n\n"));
    }

    #[test]
    fn sink_creation_failure_is_fatal() {
        let tree = FakeTree::new().file("src/a.cs", "a");

        let err = service(tree, FakeSink::refusing())
            .collect(Path::new("src"), Path::new("denied.txt"))
            .unwrap_err();

        assert!(matches!(
            err,
            CollectError::Application(ApplicationError::SinkCreation { .. })
        ));
    }

    #[test]
    fn empty_tree_writes_empty_bundle() {
        let sink = FakeSink::default();
        let report = service(FakeTree::new(), sink.clone())
            .collect(Path::new("nowhere"), Path::new("out.txt"))
            .unwrap();

        assert_eq!(report.total(), 0);
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn custom_filter_is_honored() {
        let tree = FakeTree::new()
            .file("src/lib.rs", "pub fn f() {}")
            .file("src/Foo.cs", "class Foo {}");
        let sink = FakeSink::default();
        let filter = CollectionFilter::default().with_extensions([".rs"]).unwrap();

        let service =
            CollectService::with_filter(Box::new(tree), Box::new(sink.clone()), filter);
        let report = service
            .collect(Path::new("src"), Path::new("out.txt"))
            .unwrap();

        assert_eq!(report.collected, 1);
        assert!(sink.contents().contains("src/lib.rs"));
        assert!(!sink.contents().contains("Foo.cs"));
    }
}
