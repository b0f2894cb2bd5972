use assert_cmd::Command;
use std::path::Path;

pub fn extnote_cmd() -> Command {
    let mut cmd = Command::cargo_bin("extnote").unwrap();
    cmd.env_remove("EXTNOTE_ROOT");
    cmd.env_remove("EXTNOTE_LOG");
    cmd
}

/// Command running against the given storage root
pub fn extnote_at(root: &Path) -> Command {
    let mut cmd = extnote_cmd();
    cmd.arg("--root").arg(root);
    cmd
}

/// Grant write access on a fresh volume
#[allow(dead_code)]
pub fn grant(root: &Path) {
    extnote_at(root).arg("grant").assert().success();
}
