use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

mod common;
use common::{block_header, hash_header, write_file};

fn edyear() -> Command {
  Command::cargo_bin("edyear").expect("binary builds")
}

fn setup_repo(root: &Path) -> Result<()> {
  write_file(root, "CMakeLists.txt", "project(demo)\n")?;
  write_file(root, "src/main.c", &block_header(2015, 2020))?;
  write_file(root, "scripts/release.sh", &hash_header(2001, 2019))?;
  Ok(())
}

#[test]
fn test_missing_root_marker_exits_with_error() -> Result<()> {
  let temp_dir = tempdir()?;

  edyear()
    .arg("--root")
    .arg(temp_dir.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("root marker 'CMakeLists.txt' not found"));
  Ok(())
}

#[test]
fn test_updates_year_ranges_end_to_end() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  setup_repo(root)?;

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--year", "2031"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Found 3 source files"))
    .stdout(predicate::str::contains("Found 0 ignored paths"))
    .stdout(predicate::str::contains("Update complete"))
    .stdout(predicate::str::contains("Updated '2' files"));

  assert_eq!(fs::read_to_string(root.join("src/main.c"))?, block_header(2015, 2031));
  assert_eq!(
    fs::read_to_string(root.join("scripts/release.sh"))?,
    hash_header(2001, 2031)
  );
  Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  setup_repo(root)?;

  edyear().arg("--root").arg(root).args(["--year", "2031"]).assert().success();
  let snapshot = fs::read_to_string(root.join("src/main.c"))?;

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--year", "2031"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Updated '0' files"));

  assert_eq!(fs::read_to_string(root.join("src/main.c"))?, snapshot);
  Ok(())
}

#[test]
fn test_ignore_file_excludes_directories() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "CMakeLists.txt", "project(demo)\n")?;
  write_file(root, ".gitignore", "vendor/\n")?;
  write_file(root, "vendor/lib.c", &block_header(2010, 2018))?;
  write_file(root, "src/app.c", &block_header(2015, 2020))?;

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--year", "2040"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Found 3 source files"))
    .stdout(predicate::str::contains("Found 1 ignored paths"))
    .stdout(predicate::str::contains("Updated '1' files"));

  // The vendored file sits behind an ignored directory and must not change.
  assert_eq!(fs::read_to_string(root.join("vendor/lib.c"))?, block_header(2010, 2018));
  assert_eq!(fs::read_to_string(root.join("src/app.c"))?, block_header(2015, 2040));
  Ok(())
}

#[test]
fn test_dry_run_reports_without_modifying() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  setup_repo(root)?;

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--year", "2032", "--dry-run"])
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::contains("with outdated year ranges"));

  assert_eq!(fs::read_to_string(root.join("src/main.c"))?, block_header(2015, 2020));

  // Apply, then a dry run has nothing left to report.
  edyear().arg("--root").arg(root).args(["--year", "2032"]).assert().success();

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--year", "2032", "--dry-run"])
    .assert()
    .success()
    .stdout(predicate::str::contains("All copyright year ranges are current."));
  Ok(())
}

#[test]
fn test_quiet_mode_silences_stdout() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  setup_repo(root)?;

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--year", "2031", "--quiet"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
  Ok(())
}

#[test]
fn test_custom_root_marker() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "Cargo.toml", "[package]\n")?;
  write_file(root, "src/lib.rs", "// Copyright 2019-2023 Example\n")?;

  edyear()
    .arg("--root")
    .arg(root)
    .args(["--root-marker", "Cargo.toml", "--year", "2026"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Update complete"));
  Ok(())
}
