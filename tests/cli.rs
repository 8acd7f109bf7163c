// Run the check binaries against fake ceph commands
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static FORK_LOCK: Mutex<()> = Mutex::new(());

/// Hold this while writing and running a script, a fork in another test
/// thread while the script is open for writing makes exec fail with ETXTBSY
fn serial() -> MutexGuard<'static, ()> {
    FORK_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Write an executable shell script standing in for `ceph`
fn fake_ceph(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("ceph");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn run(bin: &str, ceph: &PathBuf, args: &[&str]) -> (Option<i32>, String) {
    let out = Command::new(bin)
        .arg("--ceph")
        .arg(ceph)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (out.status.code(), String::from_utf8(out.stdout).unwrap())
}

fn df(ceph: &PathBuf, args: &[&str]) -> (Option<i32>, String) {
    run(env!("CARGO_BIN_EXE_check-ceph-df"), ceph, args)
}

fn health(ceph: &PathBuf) -> (Option<i32>, String) {
    run(env!("CARGO_BIN_EXE_check-ceph-health"), ceph, &[])
}

fn df_body(total: u64, used: u64, avail: u64) -> String {
    format!(
        r#"[ "$1 $2" = "df --format=json" ] || exit 22
echo '{{"stats":{{"total_space":{},"total_used":{},"total_avail":{}}},"pools":[]}}'"#,
        total, used, avail
    )
}

#[test]
fn df_ok() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, &df_body(1000, 200, 800));
    assert_eq!(
        df(&ceph, &[]),
        (
            Some(0),
            "[OK] Ceph df avail. seems good (0MB/0MB)\n".to_owned()
        )
    );
}

#[test]
fn df_critical() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, &df_body(1_048_576_000, 10_485_760, 1_038_090_240));
    assert_eq!(
        df(&ceph, &["85", "98"]),
        (
            Some(2),
            "[ERR] Ceph df avail. critical (1013760MB/1024000MB)\n".to_owned()
        )
    );
}

#[test]
fn df_warning_with_custom_thresholds() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, &df_body(1000, 400, 600));
    assert_eq!(
        df(&ceph, &["50", "70"]),
        (
            Some(1),
            "[WARN] Ceph df avail. warning (0MB/0MB)\n".to_owned()
        )
    );
}

#[test]
fn df_inconsistent() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, &df_body(900, 100, 700));
    assert_eq!(
        df(&ceph, &[]),
        (Some(1), "[ERR] Used + Avail. != Total space\n".to_owned())
    );
}

#[test]
fn df_command_fails() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, "echo 'error connecting to the cluster' >&2\nexit 1");
    assert_eq!(
        df(&ceph, &[]),
        (Some(1), "[WARN] ceph not found ?\n".to_owned())
    );
}

#[test]
fn df_garbage_output() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, "echo 'GLOBAL: SIZE AVAIL RAW USED'");
    assert_eq!(
        df(&ceph, &[]),
        (Some(1), "[WARN] ceph not found ?\n".to_owned())
    );
}

#[test]
fn df_missing_ceph() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = dir.path().join("no-such-ceph");
    assert_eq!(
        df(&ceph, &[]),
        (Some(1), "[WARN] ceph not found ?\n".to_owned())
    );
}

#[test]
fn health_states() {
    let cases = [
        ("HEALTH_OK", Some(0), "CEPH OK: \n"),
        (
            "HEALTH_WARN 3 pgs degraded",
            Some(1),
            "CEPH WARNING: 3 pgs degraded\n",
        ),
        ("HEALTH_ERR mon down", Some(2), "CEPH CRITICAL: mon down\n"),
        ("what is this", Some(3), "CEPH UNKNOWN: what is this\n"),
    ];
    for &(said, code, expected) in cases.iter() {
        let _guard = serial();
        let dir = TempDir::new().unwrap();
        let ceph = fake_ceph(&dir, &format!("[ \"$1\" = health ] || exit 22\necho '{}'", said));
        assert_eq!(health(&ceph), (code, expected.to_owned()), "ceph said {:?}", said);
    }
}

#[test]
fn health_command_fails() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = fake_ceph(&dir, "echo 'no keyring found' >&2\nexit 1");
    assert_eq!(
        health(&ceph),
        (Some(3), "CEPH UNKNOWN: no keyring found\n".to_owned())
    );
}

#[test]
fn health_missing_ceph() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let ceph = dir.path().join("no-such-ceph");
    assert_eq!(
        health(&ceph),
        (
            Some(3),
            "CEPH UNKNOWN: unable to launch ceph health\n".to_owned()
        )
    );
}
