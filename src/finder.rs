//! # Finder Module
//!
//! This module partitions a directory tree into kept and ignored paths.
//!
//! An ignored directory is reported as a single entry without descending
//! into it; everything else is classified file by file. Matching is
//! performed against the literal path string exactly as produced by the
//! platform's path join, which is what the suffix-anchored ignore patterns
//! expect.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use tracing::trace;

/// Recursively partitions the tree under `search_path` into accepted and
/// ignored paths.
///
/// Both returned lists are sorted ascending lexicographically at every
/// recursion level, so the caller-visible result is fully sorted.
///
/// # Parameters
///
/// * `search_path` - Directory (or file) to start from
/// * `patterns` - Compiled ignore patterns
///
/// # Returns
///
/// A pair of sorted path lists: files to process, and ignored paths. An
/// ignored directory appears once in the second list and its children are
/// never enumerated.
///
/// # Errors
///
/// Returns an error if a directory cannot be read. Failures are not
/// skipped; the whole run aborts.
pub fn find_files(search_path: &Path, patterns: &[Pattern]) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
  if is_ignored(search_path, patterns) {
    trace!("Ignoring subtree: {}", search_path.display());
    return Ok((Vec::new(), vec![search_path.to_path_buf()]));
  }

  let mut results = Vec::new();
  let mut ignored = Vec::new();
  let mut subdirs = Vec::new();

  let entries =
    fs::read_dir(search_path).with_context(|| format!("Failed to read directory: {}", search_path.display()))?;

  for entry in entries {
    let entry = entry.with_context(|| format!("Failed to read directory entry in {}", search_path.display()))?;
    let path = entry.path();

    // Dirent file types; symlinks are neither followed nor classified, so
    // link cycles cannot recurse.
    let file_type = entry
      .file_type()
      .with_context(|| format!("Failed to determine file type of {}", path.display()))?;

    if file_type.is_dir() {
      subdirs.push(path);
    } else if file_type.is_file() {
      if is_ignored(&path, patterns) {
        ignored.push(path);
      } else {
        results.push(path);
      }
    }
  }

  for dir in subdirs {
    let (sub_results, sub_ignored) = find_files(&dir, patterns)?;
    results.extend(sub_results);
    ignored.extend(sub_ignored);
  }

  results.sort();
  ignored.sort();

  Ok((results, ignored))
}

/// Checks whether a path matches any ignore pattern.
fn is_ignored(path: &Path, patterns: &[Pattern]) -> bool {
  let path_str = path.to_string_lossy();
  patterns.iter().any(|pattern| pattern.matches(&path_str))
}
