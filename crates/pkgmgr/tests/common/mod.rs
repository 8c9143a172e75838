use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch `PATH` holding stub package manager binaries.
pub struct TestEnv {
    _tmp: TempDir,
    pub bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create stub bin dir");
        Self { _tmp: tmp, bin }
    }

    /// Stub that prints its name and arguments on one line and exits with `code`.
    #[cfg(unix)]
    pub fn stub(&self, name: &str, code: i32) -> PathBuf {
        self.script(name, &format!("echo \"{name} $*\"\nexit {code}\n"))
    }

    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
        path
    }

    /// Command for `bin` with only the stub dir on `PATH` and no detection signals.
    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = match bin {
            "pkgmgrx" => cargo_bin_cmd!("pkgmgrx"),
            _ => cargo_bin_cmd!("pkgmgr"),
        };
        cmd.env("PATH", &self.bin)
            .env_remove("PKGMGR")
            .env_remove("npm_config_user_agent")
            .env_remove("PKGMGR_LOG");
        cmd
    }
}
