//! # Output Module
//!
//! This module centralizes all user-facing output for the edyear tool.
//! It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! ## Design Goals
//!
//! - **Stable**: The default summary lines are a fixed, scriptable contract
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};

/// Symbols used in output
pub mod symbols {
  /// Success/nothing to do
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Year range updated
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Print the scan result counts.
///
/// These are the first two lines of the summary contract.
pub fn print_file_counts(source_count: usize, ignored_count: usize) {
  if is_quiet() {
    return;
  }

  println!("Found {} source files", source_count);
  println!("Found {} ignored paths", ignored_count);
}

/// Print the completion marker and update count.
///
/// These are the last two lines of the summary contract.
pub fn print_completion(updated_count: usize) {
  if is_quiet() {
    return;
  }

  println!("Update complete");
  println!("Updated '{}' files", updated_count);
}

/// Print the list of files whose year ranges were rewritten.
///
/// Verbose mode only; the default output sticks to the summary counts.
pub fn print_updated_files(files: &[PathBuf], workspace_root: Option<&Path>) {
  if !is_verbose() || files.is_empty() {
    return;
  }

  let count = files.len();
  let header = format!(
    "{} Updated year ranges in {} {}:",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  for file in files {
    println!("  {}", make_relative_path(file, workspace_root));
  }
}

/// Print the list of files that would change in dry run mode.
///
/// In quiet mode, just the file paths are printed (for scripting).
pub fn print_pending_files(files: &[PathBuf], workspace_root: Option<&Path>) {
  if files.is_empty() {
    print_all_files_current();
    return;
  }

  if is_quiet() {
    for file in files {
      println!("{}", make_relative_path(file, workspace_root));
    }
    return;
  }

  let count = files.len();
  let header = format!(
    "{} {} {} with outdated year ranges:",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  for file in files {
    println!("  {}", make_relative_path(file, workspace_root));
  }
}

/// Print the success message when every range already ends at the current
/// year.
pub fn print_all_files_current() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All copyright year ranges are current.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Render a path relative to the workspace root for display.
fn make_relative_path(path: &Path, workspace_root: Option<&Path>) -> String {
  if let Some(root) = workspace_root {
    if let Ok(stripped) = path.strip_prefix(root) {
      return stripped.to_string_lossy().to_string();
    }
    if let Some(rel) = pathdiff::diff_paths(path, root) {
      return rel.to_string_lossy().to_string();
    }
  }
  path.to_string_lossy().to_string()
}
