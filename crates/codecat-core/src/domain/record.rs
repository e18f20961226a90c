//! The output format: one record per collected file.

use std::path::{Path, PathBuf};

/// Written after every record body, success or error.
pub const RECORD_SEPARATOR: &str = "\n\n";

/// One record in the bundle: a header naming the source path, plus either
/// the file's verbatim content or a single-line read-error marker.
///
/// The header and error marker strings are part of the output contract
/// (downstream consumers split the bundle on them) and must not be
/// reworded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    path: PathBuf,
    body: RecordBody,
}

/// What goes between a record's header and its separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// The file's full content, untransformed.
    Content(String),
    /// Description of why the file could not be read.
    ReadError(String),
}

impl Record {
    /// A record for a file whose read succeeded.
    pub fn content(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: RecordBody::Content(text.into()),
        }
    }

    /// A record for a file whose read failed.
    pub fn read_error(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: RecordBody::ReadError(description.into()),
        }
    }

    /// The source path this record describes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` if this record carries a read-error marker instead of content.
    pub fn is_error(&self) -> bool {
        matches!(self.body, RecordBody::ReadError(_))
    }

    /// The header line, terminated with a newline.
    pub fn header(&self) -> String {
        format!("// === Arquivo: {} ===\n", self.path.display())
    }

    /// Render the whole record: header, body, separator.
    pub fn render(&self) -> String {
        let mut out = self.header();
        match &self.body {
            RecordBody::Content(text) => out.push_str(text),
            RecordBody::ReadError(description) => {
                out.push_str(&format!(
                    "// ERRO AO LER {}: {}\n",
                    self.path.display(),
                    description
                ));
            }
        }
        out.push_str(RECORD_SEPARATOR);
        out
    }
}
