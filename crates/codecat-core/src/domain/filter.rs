//! File-selection rules for a collection run.

use std::collections::BTreeSet;

use crate::domain::DomainError;

/// Extensions picked up by a default run.
const DEFAULT_EXTENSIONS: [&str; 2] = [".cs", ".dart"];

/// Directory names a default run never descends into: the Dart dependency
/// cache, the MSBuild output directory, and generated EF migrations.
const DEFAULT_EXCLUDED_DIRS: [&str; 3] = [".dart_tool", "obj", "Migrations"];

/// Which files a run picks up and which directories it refuses to enter.
///
/// Extension matching is case-insensitive and applies to the file *name*
/// only. Directory exclusion is an exact name match, and pruning is
/// absolute: nothing under an excluded directory is visited, matching
/// files included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFilter {
    /// Stored lowercase, each with its leading dot.
    extensions: Vec<String>,
    excluded_dirs: BTreeSet<String>,
}

impl Default for CollectionFilter {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl CollectionFilter {
    /// Replace the extension set.
    ///
    /// Every extension must be non-empty and start with `'.'`; the set
    /// itself must be non-empty. Matching is case-insensitive, so the
    /// stored form is lowercased.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|e| e.into().to_lowercase())
            .collect();

        if extensions.is_empty() {
            return Err(DomainError::EmptyExtensionSet);
        }
        for ext in &extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(DomainError::InvalidExtension {
                    extension: ext.clone(),
                });
            }
        }

        self.extensions = extensions;
        Ok(self)
    }

    /// Replace the excluded-directory set. Names are matched exactly.
    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// `true` if a file with this name qualifies for collection.
    pub fn matches_file(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }

    /// `true` if a directory with this name must not be descended into.
    pub fn prunes_dir(&self, dir_name: &str) -> bool {
        self.excluded_dirs.contains(dir_name)
    }

    /// The recognised extensions, lowercase with leading dot.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// The excluded directory names.
    pub fn excluded_dirs(&self) -> impl Iterator<Item = &str> {
        self.excluded_dirs.iter().map(String::as_str)
    }
}
