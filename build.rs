use std::process::Command;

fn main() {
  embed_build_info();

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Captures the current commit hash and date so `--version` can report the
/// exact build. Both values are omitted when Git is unavailable.
fn embed_build_info() {
  let probes: [(&str, &[&str]); 2] = [
    ("GIT_HASH", &["rev-parse", "--short", "HEAD"]),
    ("GIT_DATE", &["log", "-1", "--format=%cs"]),
  ];

  for (var, args) in probes {
    if let Ok(output) = Command::new("git").args(args).output() {
      let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
      println!("cargo:rustc-env={var}={value}");
    }
  }
}
