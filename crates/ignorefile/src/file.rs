use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::{
    IgnoreFileOptions, PatternLedger, SynthError, debug_ledger::trace_file_synthesized,
    error::IoResultExt,
};

/// An ignore file owned by a project: a relative path plus its pattern ledger.
///
/// The ledger is only mutated through [`add_patterns`](Self::add_patterns),
/// [`remove_patterns`](Self::remove_patterns), [`include`](Self::include) and
/// [`exclude`](Self::exclude). Synthesis reads it without modification.
///
/// # Examples
///
/// ```
/// use ignorefile::IgnoreFile;
///
/// let mut file = IgnoreFile::new(".dockerignore");
/// file.exclude(["a.txt"]);
/// file.include(["a.txt"]);
///
/// assert_eq!(file.patterns(), ["!a.txt"]);
/// assert!(file.synthesize().ends_with("\n!a.txt\n"));
/// ```
#[derive(Clone, Debug)]
pub struct IgnoreFile {
    path: PathBuf,
    marker: Option<String>,
    ledger: PatternLedger,
}

impl IgnoreFile {
    /// Creates an ignore file at `path` with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, IgnoreFileOptions::default())
    }

    /// Creates an ignore file at `path`, applying the initial patterns from
    /// `options`.
    pub fn with_options(path: impl Into<PathBuf>, options: IgnoreFileOptions) -> Self {
        let IgnoreFileOptions {
            marker,
            ignore_patterns,
        } = options;
        Self {
            path: path.into(),
            marker,
            ledger: PatternLedger::from_patterns(ignore_patterns),
        }
    }

    /// Returns the file path relative to the output root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the marker comment text, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// Returns the underlying ledger.
    #[must_use]
    pub const fn ledger(&self) -> &PatternLedger {
        &self.ledger
    }

    /// See [`PatternLedger::add_patterns`].
    pub fn add_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ledger.add_patterns(patterns);
    }

    /// See [`PatternLedger::remove_patterns`].
    pub fn remove_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ledger.remove_patterns(patterns);
    }

    /// See [`PatternLedger::include`].
    pub fn include<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ledger.include(paths);
    }

    /// See [`PatternLedger::exclude`].
    pub fn exclude<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ledger.exclude(paths);
    }

    /// Returns the rendered patterns in ledger order.
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        self.ledger.patterns()
    }

    /// Renders the file contents.
    ///
    /// The marker (if any) comes first, each of its lines commented with
    /// `# `, then one pattern per line.
    /// Every line, including the last, ends with `\n`.
    #[must_use]
    pub fn synthesize(&self) -> String {
        let mut text = String::new();
        if let Some(marker) = &self.marker {
            for line in marker.split('\n') {
                text.push_str("# ");
                text.push_str(line.trim_end_matches('\r'));
                text.push('\n');
            }
        }
        for entry in self.ledger.entries() {
            text.push_str(&entry.render());
            text.push('\n');
        }
        trace_file_synthesized(
            &self.path.to_string_lossy(),
            self.ledger.len(),
            self.marker.is_some(),
        );
        text
    }

    /// Writes the synthesized contents to `root.join(self.path())`.
    ///
    /// Missing parent directories are created. Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidPath`] if the file path is empty, absolute,
    /// or contains `..`, and [`SynthError::Io`] if writing fails.
    pub fn write_to(&self, root: &Path) -> Result<PathBuf, SynthError> {
        validate_relative(&self.path)?;
        let target = root.join(&self.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
        fs::write(&target, self.synthesize()).with_path(&target)?;
        Ok(target)
    }
}

fn validate_relative(path: &Path) -> Result<(), SynthError> {
    let mut has_name = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(SynthError::InvalidPath(path.to_path_buf()));
            }
        }
    }
    if has_name {
        Ok(())
    } else {
        Err(SynthError::InvalidPath(path.to_path_buf()))
    }
}
