use super::*;

#[test]
fn exclude_then_include_keeps_include() {
    let mut ledger = PatternLedger::new();
    ledger.exclude(["a.txt"]);
    ledger.include(["a.txt"]);
    assert_eq!(ledger.patterns(), ["!a.txt"]);
}

#[test]
fn include_then_exclude_keeps_exclude() {
    let mut ledger = PatternLedger::new();
    ledger.include(["a.txt"]);
    ledger.exclude(["a.txt"]);
    assert_eq!(ledger.patterns(), ["a.txt"]);
}

#[test]
fn repeated_pattern_is_stored_once() {
    let mut ledger = PatternLedger::new();
    ledger.add_patterns(["*.log", "*.log"]);
    ledger.add_patterns(["*.log"]);
    assert_eq!(ledger.patterns(), ["*.log"]);
}

#[test]
fn include_marker_is_not_doubled() {
    let mut marked = PatternLedger::new();
    marked.include(["!*.js"]);
    let mut plain = PatternLedger::new();
    plain.include(["*.js"]);

    assert_eq!(marked, plain);
    assert_eq!(marked.patterns(), ["!*.js"]);
}

#[test]
fn exclude_strips_marker() {
    let mut ledger = PatternLedger::new();
    ledger.exclude(["!dist/"]);
    assert_eq!(ledger.patterns(), ["dist/"]);
}

#[test]
fn remove_ignores_sign_of_argument() {
    let mut ledger = PatternLedger::from_patterns(["!boom/bam", "*.js"]);
    ledger.remove_patterns(["boom/bam", "!*.js"]);
    assert!(ledger.is_empty());
}

#[test]
fn remove_missing_pattern_is_noop() {
    let mut ledger = PatternLedger::from_patterns(["a", "!b"]);
    let before = ledger.clone();
    ledger.remove_patterns(["c", "!d", ""]);
    assert_eq!(ledger, before);
}

#[test]
fn remove_does_not_cascade_into_directory() {
    let mut ledger = PatternLedger::from_patterns(["src/", "src/a.txt"]);
    ledger.remove_patterns(["src/"]);
    assert_eq!(ledger.patterns(), ["src/a.txt"]);
}

#[test]
fn comments_never_disturb_entries() {
    let mut ledger = PatternLedger::from_patterns(["a", "b"]);
    ledger.add_patterns(["# a", "   #b", "", "\t"]);
    assert_eq!(ledger.patterns(), ["a", "b"]);
}

#[test]
fn include_directory_purges_excluded_descendants() {
    let mut ledger = PatternLedger::new();
    ledger.exclude(["a/1", "a/2"]);
    ledger.add_patterns(["bloop/", "!floop/"]);
    ledger.include(["a/"]);
    assert_eq!(ledger.patterns(), ["bloop/", "!floop/", "!a/"]);
}

#[test]
fn exclude_directory_purges_included_descendants() {
    let mut ledger = PatternLedger::new();
    ledger.include(["a/1", "a/2"]);
    ledger.exclude(["a/"]);
    assert_eq!(ledger.patterns(), ["a/"]);
}

#[test]
fn directory_keeps_same_sign_descendants() {
    let mut ledger = PatternLedger::from_patterns(["src/a.txt", "!src/b.txt"]);
    ledger.add_patterns(["src/"]);
    assert_eq!(ledger.patterns(), ["src/a.txt", "src/"]);
}

#[test]
fn directory_purge_reaches_nested_directories() {
    let mut ledger = PatternLedger::from_patterns(["!a/b/", "!a/b/c/d.txt", "x/"]);
    ledger.add_patterns(["a/"]);
    assert_eq!(ledger.patterns(), ["x/", "a/"]);
}

#[test]
fn file_write_under_opposite_directory_is_kept() {
    let mut ledger = PatternLedger::from_patterns(["src/"]);
    ledger.add_patterns(["!src/keep.txt"]);
    assert_eq!(ledger.patterns(), ["src/", "!src/keep.txt"]);
}

#[test]
fn directory_prefix_is_literal() {
    let mut ledger = PatternLedger::from_patterns(["srcs/a", "src", "!src/*.rs"]);
    ledger.add_patterns(["!src/"]);
    assert_eq!(ledger.patterns(), ["srcs/a", "src", "!src/*.rs", "!src/"]);
}

#[test]
fn glob_descendants_are_compared_as_strings() {
    let mut ledger = PatternLedger::from_patterns(["src/**/*.snap"]);
    ledger.include(["src/"]);
    assert_eq!(ledger.patterns(), ["!src/"]);
}

#[test]
fn file_renders_patterns_under_marker() {
    let mut file = IgnoreFile::new(".myignorefile");
    file.add_patterns(["*.js", "#comment"]);
    file.add_patterns(["!foo"]);
    file.add_patterns(["# hello world"]);
    file.add_patterns(["bar"]);

    let text = file.synthesize();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(format!("# {DEFAULT_MARKER}").as_str()));
    assert_eq!(lines.collect::<Vec<_>>(), ["*.js", "!foo", "bar"]);
    assert!(text.ends_with("bar\n"));
}
