use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Component, Path, PathBuf};

use crate::{IgnoreFile, IgnoreFileOptions, SynthError};

/// The set of ignore files owned by one project, keyed by relative path.
///
/// Each path maps to exactly one [`IgnoreFile`] for the lifetime of the
/// registry, so every caller that asks for `.gitignore` shares one ledger.
/// Paths are keyed without `.` components, so `./.gitignore` and
/// `.gitignore` name the same file.
///
/// # Examples
///
/// ```
/// use ignorefile::IgnoreFiles;
///
/// let mut files = IgnoreFiles::new();
/// files.get_or_create(".gitignore").exclude(["target/"]);
/// files.get_or_create(".gitignore").exclude(["*.log"]);
///
/// assert_eq!(files.len(), 1);
/// assert_eq!(files.get(".gitignore").unwrap().patterns(), ["target/", "*.log"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IgnoreFiles {
    files: BTreeMap<PathBuf, IgnoreFile>,
}

impl IgnoreFiles {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// Returns the ignore file for `path`, creating it with default options.
    pub fn get_or_create(&mut self, path: impl Into<PathBuf>) -> &mut IgnoreFile {
        self.get_or_create_with(path, IgnoreFileOptions::default)
    }

    /// Returns the ignore file for `path`, creating it from `options` if it
    /// does not exist yet. Options are ignored for an existing file.
    pub fn get_or_create_with<F>(&mut self, path: impl Into<PathBuf>, options: F) -> &mut IgnoreFile
    where
        F: FnOnce() -> IgnoreFileOptions,
    {
        match self.files.entry(registry_key(&path.into())) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                let file = IgnoreFile::with_options(vacant.key().clone(), options());
                vacant.insert(file)
            }
        }
    }

    /// Returns the ignore file for `path`, if registered.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&IgnoreFile> {
        self.files.get(&registry_key(path.as_ref()))
    }

    /// Returns the ignore file for `path` mutably, if registered.
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut IgnoreFile> {
        self.files.get_mut(&registry_key(path.as_ref()))
    }

    /// Unregisters and returns the ignore file for `path`.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<IgnoreFile> {
        self.files.remove(&registry_key(path.as_ref()))
    }

    /// Returns the number of registered files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no files are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over registered files in path order.
    pub fn iter(&self) -> impl Iterator<Item = &IgnoreFile> {
        self.files.values()
    }

    /// Writes every registered file under `root`, in path order.
    ///
    /// # Errors
    ///
    /// Stops at the first file that fails to write and returns its error.
    /// Files earlier in path order have already been written at that point.
    pub fn synthesize_all(&self, root: &Path) -> Result<Vec<PathBuf>, SynthError> {
        self.iter().map(|file| file.write_to(root)).collect()
    }
}

fn registry_key(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

impl<'a> IntoIterator for &'a IgnoreFiles {
    type Item = &'a IgnoreFile;
    type IntoIter = std::collections::btree_map::Values<'a, PathBuf, IgnoreFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_default_is_empty() {
        let files = IgnoreFiles::default();
        assert!(files.is_empty());
        assert!(files.get(".gitignore").is_none());
    }

    #[test]
    fn get_or_create_with_ignores_options_for_existing_file() {
        let mut files = IgnoreFiles::new();
        files.get_or_create(".gitignore").exclude(["a"]);
        let file = files.get_or_create_with(".gitignore", || {
            IgnoreFileOptions::default().with_patterns(["b"])
        });
        assert_eq!(file.patterns(), ["a"]);
    }

    #[test]
    fn iteration_follows_path_order() {
        let mut files = IgnoreFiles::new();
        files.get_or_create(".npmignore");
        files.get_or_create(".dockerignore");
        files.get_or_create(".gitignore");

        let paths: Vec<_> = files.iter().map(|file| file.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from(".dockerignore"),
                PathBuf::from(".gitignore"),
                PathBuf::from(".npmignore"),
            ]
        );
    }

    #[test]
    fn current_dir_prefix_names_the_same_file() {
        let mut files = IgnoreFiles::new();
        files.get_or_create(".gitignore").exclude(["a"]);
        files.get_or_create("./.gitignore").exclude(["b"]);
        files.get_or_create("web/./.npmignore").exclude(["c"]);

        assert_eq!(files.len(), 2);
        assert_eq!(files.get("./.gitignore").unwrap().patterns(), ["a", "b"]);
        assert_eq!(
            files.get(".gitignore").unwrap().path(),
            Path::new(".gitignore")
        );
        assert!(files.get_mut("./web/.npmignore").is_some());
        assert!(files.remove("./web/.npmignore").is_some());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn remove_returns_file() {
        let mut files = IgnoreFiles::new();
        files.get_or_create(".gitignore").include(["keep"]);
        let removed = files.remove(".gitignore").expect("registered");
        assert_eq!(removed.patterns(), ["!keep"]);
        assert!(files.is_empty());
    }

    #[test]
    fn get_mut_edits_shared_ledger() {
        let mut files = IgnoreFiles::new();
        files.get_or_create(".gitignore").exclude(["a", "b"]);
        files.get_mut(".gitignore").unwrap().remove_patterns(["a"]);
        assert_eq!(files.get(".gitignore").unwrap().patterns(), ["b"]);
    }
}
