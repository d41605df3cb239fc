#![allow(dead_code)]

//! Test harness for driving the `apio` binary against a fake toolchain.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod");
}

/// Isolated `PATH`, project directory and fake SCons script.
pub struct GraphEnv {
    bin_dir: TempDir,
    tools_dir: TempDir,
    project_dir: TempDir,
    scons: PathBuf,
}

impl GraphEnv {
    /// Fake SCons records its argv to `args.txt` in the project and exits
    /// with `exit_code`.
    pub fn new(exit_code: i32) -> Self {
        let bin_dir = TempDir::new().expect("bin dir");
        let tools_dir = TempDir::new().expect("tools dir");
        let project_dir = TempDir::new().expect("project dir");
        fs::write(project_dir.path().join("apio.ini"), "[env]\nboard = alhambra-ii\n")
            .expect("write apio.ini");

        let scons = tools_dir.path().join("fake-scons");
        fs::write(
            &scons,
            format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > args.txt\nexit {exit_code}\n"),
        )
        .expect("write fake scons");
        #[cfg(unix)]
        make_executable(&scons);

        Self {
            bin_dir,
            tools_dir,
            project_dir,
            scons,
        }
    }

    pub fn install_dot(&self) {
        let dot = self.bin_dir.path().join("dot");
        fs::write(&dot, "#!/bin/sh\nexit 0\n").expect("write fake dot");
        #[cfg(unix)]
        make_executable(&dot);
    }

    pub fn project_dir(&self) -> &Path {
        self.project_dir.path()
    }

    pub fn recorded_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.project_dir.path().join("args.txt"))
            .ok()
            .map(|text| text.lines().map(str::to_string).collect())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("apio"));
        cmd.env("PATH", self.bin_dir.path())
            .env("APIO_SCONS", &self.scons)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("APIO_LOG");
        cmd
    }

    pub fn graph(&self, extra: &[&str]) -> assert_cmd::assert::Assert {
        let project = self.project_dir.path().to_str().expect("utf-8 temp path");
        self.command()
            .args(["graph", "--project-dir", project])
            .args(extra)
            .assert()
    }
}
