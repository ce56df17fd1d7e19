//! # edyear
//!
//! A tool that keeps copyright year ranges in source file comment headers up
//! to date.
//!
//! `edyear` walks a repository tree, applies gitignore-style exclusion
//! patterns, and rewrites `YYYY-YYYY` ranges found in comments containing
//! the word `Copyright` so the end year becomes the current year. Files are
//! modified in place, and re-running after a successful update is a no-op,
//! so the tool converges idempotently.
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use edyear::finder::find_files;
//! use edyear::ignore::load_ignore_file;
//! use edyear::rewriter::CopyrightRewriter;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load exclusion patterns; a missing file yields only the defaults
//!     let patterns = load_ignore_file(Path::new(".gitignore"))?;
//!
//!     // Partition the tree into kept and ignored paths
//!     let (sources, _ignored) = find_files(Path::new("."), &patterns)?;
//!
//!     // Extend every Copyright year range to end at 2025
//!     let rewriter = CopyrightRewriter::new(2025);
//!     for path in &sources {
//!         rewriter.update_file(path)?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`ignore`] - Ignore-file loading and pattern normalization
//! * [`finder`] - Recursive partitioning of a tree into kept and ignored paths
//! * [`rewriter`] - Year-range rewriting inside comment headers
//! * [`workspace`] - Repository root discovery and validation
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`ignore`]: crate::ignore
//! [`finder`]: crate::finder
//! [`rewriter`]: crate::rewriter
//! [`workspace`]: crate::workspace
//! [`logging`]: crate::logging

// Re-export modules for public API
pub mod finder;
pub mod ignore;
pub mod logging;
pub mod rewriter;
pub mod workspace;
