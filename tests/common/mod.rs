use assert_cmd::Command;
use std::path::Path;

pub fn diario_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diario").unwrap();
    cmd.env_remove("DIARIO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--root").arg(root);
    cmd
}
