use std::{fs, process::Command, time::SystemTime};

fn main() {
  let now = SystemTime::now()
    .duration_since(std::time::UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or_default();
  println!("cargo:rustc-env=BUILD_TIME={}", now);

  println!("cargo:rerun-if-changed=.git/HEAD");
  println!("cargo:rerun-if-changed=build.rs");

  let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"])
    .or_else(branch_from_head_file)
    .unwrap_or_else(|| "unknown".to_string());
  let commit = git(&["rev-parse", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
  let commit_short = if commit == "unknown" {
    commit.clone()
  } else {
    commit.chars().take(7).collect()
  };

  println!("cargo:rustc-env=GIT_BRANCH={}", branch);
  println!("cargo:rustc-env=GIT_COMMIT={}", commit);
  println!("cargo:rustc-env=GIT_COMMIT_SHORT={}", commit_short);
}

fn git(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
  (!value.is_empty()).then_some(value)
}

fn branch_from_head_file() -> Option<String> {
  let head = fs::read_to_string(".git/HEAD").ok()?;
  head
    .strip_prefix("ref: ")
    .and_then(|r| r.trim().rsplit('/').next())
    .map(str::to_string)
}
