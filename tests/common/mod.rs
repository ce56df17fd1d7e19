#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use glob::Pattern;

/// Compiles raw glob strings for use in tests.
pub fn patterns(raw: &[&str]) -> Vec<Pattern> {
  raw
    .iter()
    .map(|p| Pattern::new(p).expect("valid test pattern"))
    .collect()
}

/// Writes a file under `root`, creating parent directories as needed.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// A C-style header with a copyright year range.
pub fn block_header(start: u32, end: u32) -> String {
  format!("/* Copyright {start}-{end} Example Authors */\nint main(void) {{ return 0; }}\n")
}

/// A hash-comment header with a copyright year range.
pub fn hash_header(start: u32, end: u32) -> String {
  format!("#!/bin/sh\n# Copyright {start}-{end} Example Authors\necho done\n")
}
