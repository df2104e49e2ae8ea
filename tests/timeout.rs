//! A test that outlives its bound is killed and reported, and the run moves
//! on to the next test. Kept to a single test so no other thread of this
//! process spawns children while the scripts are being copied.
#![cfg(unix)]

use isorun::{executor::Context, picker::toml::Config};
use std::{
    fs,
    os::unix::fs::PermissionsExt,
    time::{Duration, Instant},
};

#[tokio::test]
async fn timeout_is_reported_and_run_continues() {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in &[
        ("test_a_sleeper.py", "exec sleep 30\n"),
        ("test_b_after.py", "echo still here\n"),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let ctx = Context::prepare(
        dir.path(),
        &Config::default(),
        Duration::from_millis(500),
    )
    .await
    .unwrap();

    let start = Instant::now();
    let mut out = Vec::new();
    let failures = ctx.flat_summary(&mut out).await.unwrap();

    assert!(start.elapsed() < Duration::from_secs(20));
    assert_eq!(failures, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "----------test_a_sleeper----------\nerror:\n\ttimed out after 500ms\n",
            "----------test_b_after----------\nstdout:\n\tstill here\nstderr:\n\t\n",
        )
    );
}
