//! # Ignore Module
//!
//! This module contains functionality for loading exclusion patterns from a
//! flat, gitignore-style ignore file.
//!
//! Patterns use shell-glob semantics (`*`, `?`, `[...]`) and are matched
//! against full path strings, so every loaded pattern is anchored with a
//! leading `*` unless it already starts with one. A small set of built-in
//! default patterns is always appended.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;

use crate::verbose_log;

/// Patterns that are always ignored, regardless of the ignore file.
///
/// The version-control directory is never part of the source tree, and
/// anything two levels under an `external/libraries` directory is vendored
/// code that carries its own copyright.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["*.git", "*external/libraries/*/*"];

/// Loads ignore patterns from the given file and appends the built-in
/// defaults.
///
/// A missing file is an expected, recoverable condition and yields only the
/// default patterns.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if a
/// normalized line is not a valid glob pattern.
pub fn load_ignore_file(path: &Path) -> Result<Vec<Pattern>> {
  let mut patterns = Vec::new();

  if path.is_file() {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    for line in content.lines() {
      if let Some(normalized) = normalize_line(line) {
        patterns.push(compile_pattern(&normalized)?);
      }
    }
    verbose_log!("Loaded {} patterns from {}", patterns.len(), path.display());
  } else {
    verbose_log!("Ignore file not found: {}", path.display());
  }

  for default in DEFAULT_IGNORE_PATTERNS {
    patterns.push(compile_pattern(default)?);
  }

  Ok(patterns)
}

/// Normalizes a raw ignore-file line into a glob pattern string.
///
/// Returns `None` for empty lines and full-line comments. Inline comments
/// are stripped, one trailing path separator is removed, and the result is
/// prefixed with `*` so matching is suffix-anchored against full paths.
fn normalize_line(line: &str) -> Option<String> {
  let mut line = line.trim();
  if line.is_empty() || line.starts_with('#') {
    return None;
  }

  if let Some(pos) = line.find('#') {
    line = line[..pos].trim();
  }
  let line = line.strip_suffix('/').unwrap_or(line);

  if line.starts_with('*') {
    Some(line.to_string())
  } else {
    Some(format!("*{line}"))
  }
}

fn compile_pattern(pattern: &str) -> Result<Pattern> {
  Pattern::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_prepends_wildcard() {
    assert_eq!(normalize_line("build"), Some("*build".to_string()));
  }

  #[test]
  fn test_normalize_keeps_existing_wildcard() {
    assert_eq!(normalize_line("*.o"), Some("*.o".to_string()));
  }

  #[test]
  fn test_normalize_strips_trailing_slash() {
    assert_eq!(normalize_line("vendor/"), Some("*vendor".to_string()));
  }

  #[test]
  fn test_normalize_strips_inline_comment() {
    assert_eq!(normalize_line("build # generated output"), Some("*build".to_string()));
  }

  #[test]
  fn test_normalize_skips_comments_and_blanks() {
    assert_eq!(normalize_line("# a comment"), None);
    assert_eq!(normalize_line("   "), None);
    assert_eq!(normalize_line(""), None);
  }

  #[test]
  fn test_normalize_always_produces_wildcard_prefix() {
    let lines = ["build", "*.o", "vendor/", "docs/api", "?cache", "[ab]tmp"];
    for line in lines {
      let normalized = normalize_line(line).expect("pattern line");
      assert!(
        normalized.starts_with('*'),
        "pattern from {:?} should start with '*': {:?}",
        line,
        normalized
      );
    }
  }

  #[test]
  fn test_suffix_anchored_matching() {
    let pattern = compile_pattern(&normalize_line("build").expect("pattern line")).expect("valid glob");
    assert!(pattern.matches("/repo/out/build"));
    assert!(!pattern.matches("/repo/build/artifact.o"));
  }
}
