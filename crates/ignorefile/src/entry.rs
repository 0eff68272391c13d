use std::fmt;

use crate::PatternSign;

/// Normalized pattern stored in a [`PatternLedger`](crate::PatternLedger).
///
/// The path never carries the `!` marker; the sign records it instead.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PatternEntry {
    pub(crate) path: String,
    pub(crate) sign: PatternSign,
}

impl PatternEntry {
    /// Normalizes a raw ignore-file line.
    ///
    /// Surrounding whitespace is trimmed. Blank lines and lines starting with
    /// `#` yield `None`. A leading `!` selects [`PatternSign::Include`] and is
    /// stripped from the stored path; anything else is an exclude.
    ///
    /// # Examples
    ///
    /// ```
    /// use ignorefile::{PatternEntry, PatternSign};
    ///
    /// let entry = PatternEntry::parse("  !build/ ").unwrap();
    /// assert_eq!(entry.path(), "build/");
    /// assert_eq!(entry.sign(), PatternSign::Include);
    ///
    /// assert!(PatternEntry::parse("# comment").is_none());
    /// assert!(PatternEntry::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let entry = match trimmed.strip_prefix('!') {
            Some(rest) => Self::include(rest),
            None => Self::exclude(trimmed),
        };
        // A bare `!` leaves nothing to store.
        (!entry.path.is_empty()).then_some(entry)
    }

    /// Creates an include entry for `path` without further normalization.
    #[must_use]
    pub fn include(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sign: PatternSign::Include,
        }
    }

    /// Creates an exclude entry for `path` without further normalization.
    #[must_use]
    pub fn exclude(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sign: PatternSign::Exclude,
        }
    }

    /// Returns the entry with its sign replaced.
    #[must_use]
    pub fn with_sign(mut self, sign: PatternSign) -> Self {
        self.sign = sign;
        self
    }

    /// Returns the stored path, without any `!` marker.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the sign of the entry.
    #[must_use]
    pub const fn sign(&self) -> PatternSign {
        self.sign
    }

    /// Returns whether the entry targets a directory and everything under it.
    #[must_use]
    pub fn is_directory_scope(&self) -> bool {
        self.path.ends_with('/')
    }

    /// Returns whether `other` is strictly nested under this directory entry.
    ///
    /// Containment is a literal string prefix test; patterns are not expanded
    /// as globs. File-scope entries contain nothing.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.is_directory_scope()
            && other.path.len() > self.path.len()
            && other.path.starts_with(&self.path)
    }

    /// Renders the entry as an ignore-file line (`path` or `!path`).
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sign.marker())?;
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_pattern_is_exclude() {
        let entry = PatternEntry::parse("*.js").unwrap();
        assert_eq!(entry.path(), "*.js");
        assert_eq!(entry.sign(), PatternSign::Exclude);
    }

    #[test]
    fn parse_strips_single_marker() {
        let entry = PatternEntry::parse("!foo").unwrap();
        assert_eq!(entry.path(), "foo");
        assert_eq!(entry.sign(), PatternSign::Include);

        let doubled = PatternEntry::parse("!!foo").unwrap();
        assert_eq!(doubled.path(), "!foo");
        assert_eq!(doubled.sign(), PatternSign::Include);
    }

    #[test]
    fn parse_trims_before_classifying() {
        assert!(PatternEntry::parse("   # indented comment").is_none());
        let entry = PatternEntry::parse("\t!src/\n").unwrap();
        assert_eq!(entry, PatternEntry::include("src/"));
    }

    #[test]
    fn parse_discards_blank_and_bare_marker() {
        assert!(PatternEntry::parse("").is_none());
        assert!(PatternEntry::parse(" \t ").is_none());
        assert!(PatternEntry::parse("!").is_none());
    }

    #[test]
    fn directory_scope_requires_trailing_separator() {
        assert!(PatternEntry::exclude("bloop/").is_directory_scope());
        assert!(!PatternEntry::exclude("bloop").is_directory_scope());
    }

    #[test]
    fn contains_is_strict_literal_prefix() {
        let dir = PatternEntry::include("src/");
        assert!(dir.contains(&PatternEntry::exclude("src/hello.txt")));
        assert!(dir.contains(&PatternEntry::exclude("src/greetings/world.txt")));
        assert!(!dir.contains(&PatternEntry::exclude("src/")));
        assert!(!dir.contains(&PatternEntry::exclude("srcs/a")));
        assert!(!PatternEntry::exclude("src").contains(&PatternEntry::exclude("src/a")));
    }

    #[test]
    fn render_prefixes_marker_for_includes() {
        assert_eq!(PatternEntry::include("floop/").render(), "!floop/");
        assert_eq!(PatternEntry::exclude("bloop/").render(), "bloop/");
    }
}
