//! # Workspace Module
//!
//! This module locates the repository root that edyear operates on and
//! validates it against a root-marker file.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default root-marker file checked at the repository root.
pub const DEFAULT_ROOT_MARKER: &str = "CMakeLists.txt";

/// Errors raised while resolving the repository root.
#[derive(Debug, Error)]
pub enum RootError {
  /// The running executable could not be located.
  #[error("cannot locate the running executable to derive the repository root: {0}")]
  ExeLocation(#[from] std::io::Error),

  /// The executable sits too close to the filesystem root.
  #[error("executable path {} has no grandparent directory", .exe.display())]
  NoGrandparent { exe: PathBuf },

  /// The computed root does not carry the marker file.
  #[error("root marker '{marker}' not found in root path: {}", .root.display())]
  MarkerMissing { root: PathBuf, marker: String },
}

/// Resolves the repository root and verifies the root-marker precondition.
///
/// Without an override the root is the directory two levels above the
/// running executable, mirroring a tool installed under `<root>/scripts/`.
/// The marker check applies to overridden roots as well.
pub fn resolve_root(override_root: Option<&Path>, marker: &str) -> Result<PathBuf, RootError> {
  let root = match override_root {
    Some(root) => root.canonicalize().unwrap_or_else(|_| root.to_path_buf()),
    None => default_root()?,
  };

  if !root.join(marker).is_file() {
    return Err(RootError::MarkerMissing {
      root,
      marker: marker.to_string(),
    });
  }

  Ok(root)
}

/// The directory two levels above the executable's resolved location.
fn default_root() -> Result<PathBuf, RootError> {
  let exe = std::env::current_exe()?;
  let exe = exe.canonicalize().unwrap_or(exe);

  match exe.parent().and_then(Path::parent) {
    Some(root) => Ok(root.to_path_buf()),
    None => Err(RootError::NoGrandparent { exe }),
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn test_resolve_root_with_marker() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    fs::write(temp_dir.path().join(DEFAULT_ROOT_MARKER), "project(test)\n").expect("marker");

    let root = resolve_root(Some(temp_dir.path()), DEFAULT_ROOT_MARKER).expect("root resolves");
    assert!(root.join(DEFAULT_ROOT_MARKER).is_file());
  }

  #[test]
  fn test_resolve_root_missing_marker() {
    let temp_dir = tempfile::tempdir().expect("temp dir");

    let err = resolve_root(Some(temp_dir.path()), DEFAULT_ROOT_MARKER).expect_err("marker is absent");
    assert!(matches!(err, RootError::MarkerMissing { .. }));
    assert!(err.to_string().contains("CMakeLists.txt"));
  }

  #[test]
  fn test_resolve_root_custom_marker() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    fs::write(temp_dir.path().join("Cargo.toml"), "[package]\n").expect("marker");

    assert!(resolve_root(Some(temp_dir.path()), "Cargo.toml").is_ok());
    assert!(resolve_root(Some(temp_dir.path()), DEFAULT_ROOT_MARKER).is_err());
  }
}
