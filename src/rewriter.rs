//! # Rewriter Module
//!
//! This module rewrites copyright year ranges found in comment headers.
//!
//! Two comment shapes are recognized: C-style `/* ... */` blocks and
//! `#`-prefixed trailing line comments. Within any comment whose text
//! contains the word `Copyright`, every `YYYY-YYYY` range is rewritten so
//! the end year becomes the configured current year, keeping the start
//! year.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// C-style block comments; the capture is the inner comment text.
static BLOCK_COMMENT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?s)/\*(.*?)\*/").expect("block comment regex must compile"));

/// `#`-prefixed trailing comments, matched per line.
static HASH_COMMENT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?m)(#.*?)$").expect("hash comment regex must compile"));

/// A year range like `2015-2020`, each year four digits starting 19 or 20.
static YEAR_RANGE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\b((?:19|20)\d{2})-((?:19|20)\d{2})\b").expect("year range regex must compile"));

/// Rewriter for copyright year ranges inside comment headers.
///
/// The target year is injected at construction so the rewriting logic stays
/// independent of the wall clock.
///
/// # Examples
///
/// ```rust
/// use edyear::rewriter::CopyrightRewriter;
///
/// let rewriter = CopyrightRewriter::new(2025);
/// let updated = rewriter.rewrite("/* Copyright 2015-2020 Example */");
/// assert_eq!(updated, "/* Copyright 2015-2025 Example */");
/// ```
pub struct CopyrightRewriter {
  /// The year every matched range is extended to.
  current_year: String,
}

impl CopyrightRewriter {
  /// Creates a new rewriter targeting the given year.
  pub fn new(current_year: i32) -> Self {
    Self {
      current_year: current_year.to_string(),
    }
  }

  /// Rewrites year ranges in every comment span containing `Copyright`.
  ///
  /// The C-style pass runs first; the hash pass then scans the possibly
  /// already modified content. Replacement is by matched span text, so a
  /// comment that appears verbatim more than once updates everywhere at
  /// once. Returns borrowed content when nothing changed.
  pub fn rewrite<'a>(&self, content: &'a str) -> Cow<'a, str> {
    let mut content = Cow::Borrowed(content);

    for comment_regex in [&*BLOCK_COMMENT, &*HASH_COMMENT] {
      // Collect the spans up front; the replacement below edits the content
      // the iterator would otherwise borrow.
      let spans: Vec<String> = comment_regex
        .captures_iter(content.as_ref())
        .filter(|caps| caps[1].contains("Copyright"))
        .map(|caps| caps[1].to_string())
        .collect();

      for span in spans {
        let updated = YEAR_RANGE.replace_all(&span, |caps: &regex::Captures| {
          format!("{}-{}", &caps[1], self.current_year)
        });
        if updated != span {
          content = Cow::Owned(content.replace(span.as_str(), updated.as_ref()));
        }
      }
    }

    content
  }

  /// Checks whether a file would be updated, without modifying it.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or is not valid UTF-8.
  pub fn check_file(&self, path: &Path) -> Result<bool> {
    let content = read_content(path)?;
    Ok(matches!(self.rewrite(&content), Cow::Owned(_)))
  }

  /// Rewrites a file in place, overwriting its full content when any range
  /// was updated.
  ///
  /// # Returns
  ///
  /// `true` if an update occurred and the file was rewritten.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, is not valid UTF-8, or
  /// cannot be written back.
  pub fn update_file(&self, path: &Path) -> Result<bool> {
    let content = read_content(path)?;

    match self.rewrite(&content) {
      Cow::Borrowed(_) => Ok(false),
      Cow::Owned(updated) => {
        fs::write(path, &updated).with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(true)
      }
    }
  }
}

fn read_content(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
