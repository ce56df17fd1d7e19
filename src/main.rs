//! # edyear
//!
//! A tool that keeps copyright year ranges in comment headers up to date.

mod cli;
mod finder;
mod ignore;
mod logging;
mod output;
mod rewriter;
mod workspace;

use anyhow::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  cli::run_update(cli.get_update_args())
}
