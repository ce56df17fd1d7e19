//! # Update Command
//!
//! This module implements the copyright year update command. This is the
//! default command when no subcommand is specified.
//!
//! Control flow: resolve the repository root, load ignore patterns, walk
//! the tree, rewrite each kept file in sorted order, print the summary.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::finder::find_files;
use crate::ignore::load_ignore_file;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_blank_line, print_completion, print_file_counts, print_hint, print_pending_files, print_updated_files,
};
use crate::rewriter::CopyrightRewriter;
use crate::workspace::{DEFAULT_ROOT_MARKER, resolve_root};
use crate::{info_log, verbose_log};

/// Default ignore file name, looked up relative to the repository root.
const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Arguments for the update command
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
  /// Repository root to operate on (default: two levels above the
  /// executable's own location)
  #[arg(long, value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// File whose presence confirms the repository root
  #[arg(long, value_name = "NAME", default_value = DEFAULT_ROOT_MARKER)]
  pub root_marker: String,

  /// Ignore file to read exclusion patterns from (default: .gitignore in
  /// the root)
  #[arg(long, value_name = "FILE")]
  pub ignore_file: Option<PathBuf>,

  /// Year to extend ranges to (default: the current year)
  #[arg(long, value_name = "YYYY")]
  pub year: Option<i32>,

  /// Dry run mode: report files that would change without modifying them
  #[arg(long)]
  pub dry_run: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the update command with the given arguments
pub fn run_update(args: UpdateArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set output mode for the info_log!/verbose_log! macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Recoverable precondition check, not a failure of the run itself
  let root = match resolve_root(args.root.as_deref(), &args.root_marker) {
    Ok(root) => root,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(1);
    }
  };
  debug!("Using repository root: {}", root.display());

  let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
  debug!("Extending year ranges to {year}");

  let ignore_file = match args.ignore_file {
    Some(path) if path.is_absolute() => path,
    Some(path) => root.join(path),
    None => root.join(DEFAULT_IGNORE_FILE),
  };
  let patterns = load_ignore_file(&ignore_file)?;

  let (source_files, ignored_paths) = find_files(&root, &patterns)?;
  print_file_counts(source_files.len(), ignored_paths.len());

  if args.dry_run {
    info_log!("Dry run: no files will be modified");
  }

  let rewriter = CopyrightRewriter::new(year);
  let mut updated = Vec::new();

  for path in &source_files {
    let changed = if args.dry_run {
      rewriter.check_file(path)?
    } else {
      rewriter.update_file(path)?
    };

    if changed {
      if args.dry_run {
        verbose_log!("Would update: {}", path.display());
      } else {
        verbose_log!("Updated: {}", path.display());
      }
      updated.push(path.clone());
    }
  }

  if args.dry_run {
    print_blank_line();
    print_pending_files(&updated, Some(&root));
    if !updated.is_empty() {
      print_blank_line();
      print_hint("Run without --dry-run to apply the updates.");
      process::exit(1);
    }
    return Ok(());
  }

  print_updated_files(&updated, Some(&root));
  print_completion(updated.len());

  Ok(())
}
