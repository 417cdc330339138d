#![cfg(unix)]
#![allow(clippy::unwrap_used)]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;

const ETXTBSY: i32 = 26;

/// Writes an executable shell script named `hdtSearch` into `dir` that stands in for the real
/// tool.
///
/// The script only reacts to `-q` invocations, records each query in `dir/invoked` and then runs
/// `body` with the query in `$2`.
pub fn fake_index_tool(dir: &TempDir, body: &str) -> PathBuf {
    let script = dir.child("hdtSearch");
    script
        .write_str(&format!(
            "#!/bin/sh\n[ \"$1\" = \"-q\" ] || exit 0\necho \"$2\" >> \"$(dirname \"$0\")/invoked\"\n{body}\nexit 0\n"
        ))
        .unwrap();
    let mut permissions = std::fs::metadata(script.path()).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(script.path(), permissions).unwrap();
    wait_until_executable(script.path().to_owned())
}

/// Another test thread may fork while the script is still open for writing. Executing the script
/// then fails with `ETXTBSY` until that child has called `exec`.
fn wait_until_executable(path: PathBuf) -> PathBuf {
    for _ in 0..100 {
        match std::process::Command::new(&path).status() {
            Err(error) if error.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(Duration::from_millis(10));
            }
            _ => return path,
        }
    }
    path
}
