//! Structured tracing for pattern ledger mutations.
//!
//! Every reconciliation step of a [`PatternLedger`](crate::PatternLedger)
//! reports what it did through the functions below. They emit events on the
//! `ignorefile::ledger` target when the `tracing` feature is enabled and
//! compile to inline no-ops otherwise.
//!
//! [`LedgerTracer`] keeps running counts of the same events so callers can
//! inspect how much churn a ledger absorbed without installing a subscriber.
//!
//! # Examples
//!
//! ```
//! use ignorefile::PatternLedger;
//!
//! let mut ledger = PatternLedger::new();
//! ledger.exclude(["a/1", "a/2"]);
//! ledger.include(["a/"]);
//!
//! let stats = ledger.stats();
//! assert_eq!(stats.added(), 3);
//! assert_eq!(stats.purged(), 2);
//! stats.summary();
//! ```

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const LEDGER_TARGET: &str = "ignorefile::ledger";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a pattern appended to the end of a ledger.
///
/// # Arguments
///
/// * `path` - The normalized path, without the `!` marker
/// * `is_include` - Whether the entry un-ignores the path
/// * `is_dir_scope` - Whether the path ends with `/`
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_added(path: &str, is_include: bool, is_dir_scope: bool) {
    tracing::debug!(
        target: LEDGER_TARGET,
        path = %path,
        is_include = is_include,
        is_dir_scope = is_dir_scope,
        "pattern_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_added(_path: &str, _is_include: bool, _is_dir_scope: bool) {}

/// Traces an existing entry displaced by a later write to the same path.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_replaced(path: &str, was_include: bool, is_include: bool) {
    tracing::debug!(
        target: LEDGER_TARGET,
        path = %path,
        was_include = was_include,
        is_include = is_include,
        "pattern_replaced"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_replaced(_path: &str, _was_include: bool, _is_include: bool) {}

/// Traces an explicit removal by exact path.
///
/// `found` is `false` when no entry matched and the removal was a no-op.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_removed(path: &str, found: bool) {
    tracing::debug!(
        target: LEDGER_TARGET,
        path = %path,
        found = found,
        "pattern_removed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_removed(_path: &str, _found: bool) {}

/// Traces a nested entry purged by a directory-scope write of opposite sign.
///
/// # Arguments
///
/// * `path` - The purged descendant path
/// * `directory` - The directory-scope path that caused the purge
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_descendant_purged(path: &str, directory: &str) {
    tracing::debug!(
        target: LEDGER_TARGET,
        path = %path,
        directory = %directory,
        "descendant_purged"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_descendant_purged(_path: &str, _directory: &str) {}

/// Traces a blank or comment line dropped during normalization.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_input_discarded(raw: &str) {
    tracing::trace!(
        target: LEDGER_TARGET,
        raw = %raw,
        "input_discarded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_input_discarded(_raw: &str) {}

/// Traces an ignore file rendered to text.
///
/// # Arguments
///
/// * `file` - The ignore file path relative to its output root
/// * `pattern_count` - Number of pattern lines written
/// * `has_marker` - Whether a marker comment was prepended
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_file_synthesized(file: &str, pattern_count: usize, has_marker: bool) {
    tracing::info!(
        target: LEDGER_TARGET,
        file = %file,
        pattern_count = pattern_count,
        has_marker = has_marker,
        "file_synthesized"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_file_synthesized(_file: &str, _pattern_count: usize, _has_marker: bool) {}

/// Traces aggregate ledger statistics.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_ledger_summary(
    added: usize,
    replaced: usize,
    removed: usize,
    purged: usize,
    discarded: usize,
) {
    tracing::info!(
        target: LEDGER_TARGET,
        added = added,
        replaced = replaced,
        removed = removed,
        purged = purged,
        discarded = discarded,
        "ledger_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_ledger_summary(
    _added: usize,
    _replaced: usize,
    _removed: usize,
    _purged: usize,
    _discarded: usize,
) {
}

// ============================================================================
// LedgerTracer - running counts of ledger events
// ============================================================================

/// Counts the mutations a ledger has absorbed.
///
/// `added` counts every append, including re-insertions of a path that was
/// already present; those are additionally counted as `replaced`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LedgerTracer {
    added: usize,
    replaced: usize,
    removed: usize,
    purged: usize,
    discarded: usize,
}

impl LedgerTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            added: 0,
            replaced: 0,
            removed: 0,
            purged: 0,
            discarded: 0,
        }
    }

    /// Records an append to the ledger.
    pub fn record_added(&mut self) {
        self.added += 1;
    }

    /// Records an existing entry displaced by a write to the same path.
    pub fn record_replaced(&mut self) {
        self.replaced += 1;
    }

    /// Records an explicit removal that found its entry.
    pub fn record_removed(&mut self) {
        self.removed += 1;
    }

    /// Records `count` descendants purged by one directory-scope write.
    pub fn record_purged(&mut self, count: usize) {
        self.purged += count;
    }

    /// Records a blank or comment input.
    pub fn record_discarded(&mut self) {
        self.discarded += 1;
    }

    /// Emits a summary trace event with all accumulated statistics.
    pub fn summary(&self) {
        trace_ledger_summary(
            self.added,
            self.replaced,
            self.removed,
            self.purged,
            self.discarded,
        );
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of appends.
    #[must_use]
    pub const fn added(&self) -> usize {
        self.added
    }

    /// Returns the number of same-path replacements.
    #[must_use]
    pub const fn replaced(&self) -> usize {
        self.replaced
    }

    /// Returns the number of explicit removals that matched an entry.
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.removed
    }

    /// Returns the number of descendants purged by directory-scope writes.
    #[must_use]
    pub const fn purged(&self) -> usize {
        self.purged
    }

    /// Returns the number of discarded blank or comment inputs.
    #[must_use]
    pub const fn discarded(&self) -> usize {
        self.discarded
    }
}

// ============================================================================
// Tests
// ============================================================================
