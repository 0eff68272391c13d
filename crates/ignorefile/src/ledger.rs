use crate::{
    PatternEntry, PatternSign,
    debug_ledger::{
        LedgerTracer, trace_descendant_purged, trace_input_discarded, trace_pattern_added,
        trace_pattern_removed, trace_pattern_replaced,
    },
};

/// Ordered, conflict-free list of ignore patterns.
///
/// Every mutation reconciles the new entry against what is already stored:
///
/// - A write to a path that is already present removes the old entry and
///   appends the new one, so the last write wins and moves to the end.
/// - A directory-scope write (path ending in `/`) purges every entry nested
///   under it whose sign differs. Same-sign descendants are kept.
/// - Blank lines and comments never enter the ledger.
///
/// The purge only runs forward from directory-scope writes. A file-scope
/// write beneath an existing directory entry of opposite sign is stored as
/// is, since it is the newer and more specific rule.
///
/// # Examples
///
/// ```
/// use ignorefile::PatternLedger;
///
/// let mut ledger = PatternLedger::new();
/// ledger.add_patterns(["src/hello.txt", "bloop/", "!floop/"]);
/// ledger.add_patterns(["!src/"]);
///
/// assert_eq!(ledger.patterns(), ["bloop/", "!floop/", "!src/"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternLedger {
    entries: Vec<PatternEntry>,
    stats: LedgerTracer,
}

impl PatternLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            stats: LedgerTracer::new(),
        }
    }

    /// Builds a ledger by applying `patterns` through [`add_patterns`](Self::add_patterns).
    #[must_use]
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ledger = Self::new();
        ledger.add_patterns(patterns);
        ledger
    }

    /// Normalizes and reconciles each raw pattern in order.
    ///
    /// A leading `!` marks an include; anything else is an exclude. Blank
    /// and comment inputs are dropped.
    pub fn add_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in patterns {
            if let Some(entry) = self.normalize(raw.as_ref()) {
                self.insert(entry);
            }
        }
    }

    /// Removes the entries whose path exactly matches each normalized pattern.
    ///
    /// The sign of both the argument and the stored entry is ignored, and
    /// nested entries are left alone. Missing paths are a no-op.
    pub fn remove_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in patterns {
            let Some(entry) = self.normalize(raw.as_ref()) else {
                continue;
            };
            let found = self.take(&entry.path).is_some();
            if found {
                self.stats.record_removed();
            }
            trace_pattern_removed(&entry.path, found);
        }
    }

    /// Adds each path as an include, whether or not it already carries `!`.
    pub fn include<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_with_sign(paths, PatternSign::Include);
    }

    /// Adds each path as an exclude, stripping a leading `!` if present.
    pub fn exclude<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_with_sign(paths, PatternSign::Exclude);
    }

    /// Reconciles a single entry produced by [`PatternEntry::parse`].
    pub(crate) fn insert(&mut self, entry: PatternEntry) {
        if let Some(previous) = self.take(&entry.path) {
            self.stats.record_replaced();
            trace_pattern_replaced(
                &entry.path,
                previous.sign.is_include(),
                entry.sign.is_include(),
            );
        }

        trace_pattern_added(
            &entry.path,
            entry.sign.is_include(),
            entry.is_directory_scope(),
        );
        self.stats.record_added();

        if entry.is_directory_scope() {
            self.purge_conflicting_descendants(&entry);
        }
        self.entries.push(entry);
    }

    /// Returns the rendered patterns in ledger order.
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        self.entries.iter().map(PatternEntry::render).collect()
    }

    /// Returns the stored entries in ledger order.
    #[must_use]
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Returns the sign currently recorded for `path`, if any.
    ///
    /// `path` is compared verbatim; it must not carry the `!` marker.
    #[must_use]
    pub fn sign_of(&self, path: &str) -> Option<PatternSign> {
        self.position(path).map(|index| self.entries[index].sign)
    }

    /// Returns whether an entry with exactly `path` is stored.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the mutation statistics gathered so far.
    #[must_use]
    pub const fn stats(&self) -> &LedgerTracer {
        &self.stats
    }

    fn add_with_sign<I, S>(&mut self, paths: I, sign: PatternSign)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in paths {
            if let Some(entry) = self.normalize(raw.as_ref()) {
                self.insert(entry.with_sign(sign));
            }
        }
    }

    fn normalize(&mut self, raw: &str) -> Option<PatternEntry> {
        let entry = PatternEntry::parse(raw);
        if entry.is_none() {
            self.stats.record_discarded();
            trace_input_discarded(raw);
        }
        entry
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.path == path)
    }

    fn take(&mut self, path: &str) -> Option<PatternEntry> {
        self.position(path).map(|index| self.entries.remove(index))
    }

    fn purge_conflicting_descendants(&mut self, directory: &PatternEntry) {
        let before = self.entries.len();
        self.entries.retain(|other| {
            let conflicting = other.sign != directory.sign && directory.contains(other);
            if conflicting {
                trace_descendant_purged(&other.path, &directory.path);
            }
            !conflicting
        });
        self.stats.record_purged(before - self.entries.len());
    }
}

impl PartialEq for PatternLedger {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PatternLedger {}

impl<S: AsRef<str>> FromIterator<S> for PatternLedger {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_patterns(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for PatternLedger {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_patterns(iter);
    }
}
