//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and supports subcommands for
//! extensibility.

mod update;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
pub use update::{UpdateArgs, run_update};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string for `--version`'s long form, including the commit the
/// binary was built from when available.
fn long_version() -> &'static str {
  let hash = option_env!("GIT_HASH").unwrap_or("");
  let date = option_env!("GIT_DATE").unwrap_or("");

  let version = if hash.is_empty() {
    env!("CARGO_PKG_VERSION").to_string()
  } else {
    format!("{} ({hash} {date})", env!("CARGO_PKG_VERSION"))
  };

  Box::leak(version.into_boxed_str())
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  long_version = long_version(),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Update copyright year ranges under the repository root
  edyear

  # Report files that would change, without modifying anything
  edyear --dry-run

  # Operate on an explicit root with a custom ignore list
  edyear --root ../project --ignore-file .copyrightignore

  # Pin the target year for reproducible runs
  edyear --year 2030 --dry-run
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub update_args: UpdateArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Update copyright year ranges in source file comment headers (default)
  Update(UpdateArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Get the effective update arguments, whether from a subcommand or
  /// top-level
  pub fn get_update_args(self) -> UpdateArgs {
    match self.command {
      Some(Command::Update(args)) => args,
      None => self.update_args,
    }
  }
}
