/// Marker written on the first line of synthesized ignore files.
pub const DEFAULT_MARKER: &str =
    "~~ Generated by ignorefile. To modify, edit the owning project and re-run synthesis.";

/// Construction options for an [`IgnoreFile`](crate::IgnoreFile).
///
/// # Examples
///
/// ```
/// use ignorefile::{IgnoreFile, IgnoreFileOptions};
///
/// let options = IgnoreFileOptions::default()
///     .without_marker()
///     .with_patterns(["target/", "*.log"]);
/// let file = IgnoreFile::with_options(".gitignore", options);
///
/// assert_eq!(file.synthesize(), "target/\n*.log\n");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IgnoreFileOptions {
    /// Comment text rendered as `# <marker>` above the patterns.
    ///
    /// `None` writes the patterns without a header line.
    pub marker: Option<String>,
    /// Raw patterns applied in order when the file is created.
    pub ignore_patterns: Vec<String>,
}

impl Default for IgnoreFileOptions {
    fn default() -> Self {
        Self {
            marker: Some(DEFAULT_MARKER.to_owned()),
            ignore_patterns: Vec::new(),
        }
    }
}

impl IgnoreFileOptions {
    /// Replaces the marker comment text.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Disables the marker comment.
    #[must_use]
    pub fn without_marker(mut self) -> Self {
        self.marker = None;
        self
    }

    /// Appends initial raw patterns.
    #[must_use]
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}
