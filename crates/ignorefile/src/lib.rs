#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ignorefile` maintains the pattern lists behind files such as `.gitignore`
//! and `.dockerignore`. Callers describe what should be ignored or re-admitted
//! through a sequence of add/remove operations; the crate keeps an ordered,
//! conflict-free list representing the net effect of those operations and
//! renders it as ignore-file text.
//!
//! Patterns are treated as strings. They are never expanded as globs nor
//! matched against the filesystem; the only structure considered is literal
//! prefix containment under directory patterns (those ending with `/`).
//!
//! # Design
//!
//! - [`PatternEntry`] is a normalized pattern: the path with any leading `!`
//!   stripped, and a [`PatternSign`] recording whether it ignores
//!   ([`Exclude`](PatternSign::Exclude)) or re-admits
//!   ([`Include`](PatternSign::Include)) the path.
//! - [`PatternLedger`] owns the ordered entries and reconciles every write.
//! - [`IgnoreFile`] pairs a ledger with its relative path and marker comment,
//!   and writes the rendered text to disk. [`IgnoreFiles`] registers one
//!   [`IgnoreFile`] per path for a project.
//!
//! # Invariants
//!
//! - A path appears at most once. Writing an existing path replaces the old
//!   entry and moves it to the end of the list.
//! - Blank lines and comments (`#`) are dropped before they reach the ledger.
//! - A directory-scope write removes every nested entry of opposite sign that
//!   was written before it. Nested entries of the same sign are kept.
//! - Removal is by exact path and never cascades.
//!
//! # Errors
//!
//! Ledger operations are total over arbitrary strings. Only
//! [`IgnoreFile::write_to`] and [`IgnoreFiles::synthesize_all`] can fail,
//! reporting [`SynthError`].
//!
//! # Examples
//!
//! ```
//! use ignorefile::PatternLedger;
//!
//! let mut ledger = PatternLedger::new();
//! ledger.add_patterns(["*.js", "#c"]);
//! ledger.add_patterns(["!foo"]);
//! ledger.add_patterns(["# x"]);
//! ledger.add_patterns(["bar"]);
//!
//! assert_eq!(ledger.patterns(), ["*.js", "!foo", "bar"]);
//! ```
//!
//! # See also
//!
//! - [`debug_ledger`] for the tracing events emitted on each mutation.

pub mod debug_ledger;
mod entry;
mod error;
mod file;
mod ledger;
mod options;
mod registry;
mod sign;

pub use entry::PatternEntry;
pub use error::SynthError;
pub use file::IgnoreFile;
pub use ledger::PatternLedger;
pub use options::{DEFAULT_MARKER, IgnoreFileOptions};
pub use registry::IgnoreFiles;
pub use sign::PatternSign;

#[cfg(test)]
mod tests;
