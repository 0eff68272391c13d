//! Shared helpers for tests that synthesize ignore files to disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;

/// Creates a fresh temporary output directory.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn output_dir() -> TempDir {
    tempfile::tempdir().expect("create temporary output directory")
}

/// Reads every regular file under `root` into a map keyed by `/`-separated
/// relative path.
///
/// # Panics
///
/// Panics if the tree cannot be read or a file is not UTF-8.
#[must_use]
pub fn snapshot(root: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    collect(root, root, &mut files).expect("read output tree");
    files
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(root, &path, files)?;
            continue;
        }
        let relative = path
            .strip_prefix(root)
            .map_err(io::Error::other)?
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        files.insert(relative, fs::read_to_string(&path)?);
    }
    Ok(())
}

/// Splits synthesized contents into lines, dropping the marker line and the
/// empty remainder after the trailing newline.
#[must_use]
pub fn split_and_ignore_marker(contents: &str) -> Vec<String> {
    let lines: Vec<&str> = contents.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }
    lines[1..lines.len() - 1]
        .iter()
        .map(|line| (*line).to_owned())
        .collect()
}
