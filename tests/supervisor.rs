//! End-to-end checks of process supervision against real executables.
//!
//! These rely on POSIX `true`, `false`, `sh`, and `sleep` being on `PATH`.
#![cfg(unix)]

use meshdash::error::SupervisorError;
use meshdash::supervisor::{ProcessState, ProcessSupervisor, StdioMode};
use std::time::{Duration, Instant};
use tokio::time::timeout;

const BOUND: Duration = Duration::from_secs(10);

fn supervisor() -> ProcessSupervisor {
    ProcessSupervisor::new().with_stdio(StdioMode::Discard)
}

#[tokio::test]
async fn clean_exit_reports_ok() {
    let child = supervisor()
        .start("true", Vec::<String>::new())
        .expect("`true` should spawn");
    let outcome = timeout(BOUND, child.wait()).await.expect("bounded wait");
    assert!(outcome.is_ok(), "got: {outcome:?}");
}

#[tokio::test]
async fn non_zero_exit_reports_error() {
    let child = supervisor()
        .start("false", Vec::<String>::new())
        .expect("`false` should spawn");
    let err = timeout(BOUND, child.wait())
        .await
        .expect("bounded wait")
        .unwrap_err();
    assert!(matches!(err, SupervisorError::Exit { .. }), "got: {err:?}");
    assert!(!err.is_spawn_failure());
    assert!(err.to_string().contains("exited with status 1"), "got: {err}");
}

#[tokio::test]
async fn missing_binary_fails_synchronously() {
    let err = supervisor()
        .start("/no/such/binary", Vec::<String>::new())
        .unwrap_err();
    assert!(err.is_spawn_failure());
    assert!(err.to_string().contains("/no/such/binary"), "got: {err}");
}

#[tokio::test]
async fn arguments_reach_the_child() {
    let child = supervisor()
        .start("sh", ["-c", "test \"$0 $1\" = \"proxy -p\"", "proxy", "-p"])
        .expect("sh should spawn");
    assert!(timeout(BOUND, child.wait()).await.expect("bounded").is_ok());
}

#[tokio::test]
async fn start_returns_before_the_child_finishes() {
    let started = Instant::now();
    let mut child = supervisor().start("sleep", ["1"]).expect("sleep should spawn");
    assert!(started.elapsed() < Duration::from_millis(900));
    assert_eq!(child.try_state(), ProcessState::Running);

    let outcome = timeout(BOUND, child.wait()).await.expect("bounded wait");
    assert!(outcome.is_ok());
    assert!(
        started.elapsed() >= Duration::from_secs(1),
        "notification arrived before the child could have exited"
    );
}

#[tokio::test]
async fn signal_termination_is_an_exit_failure() {
    let child = supervisor()
        .start("sh", ["-c", "kill -TERM $$"])
        .expect("sh should spawn");
    let err = timeout(BOUND, child.wait())
        .await
        .expect("bounded wait")
        .unwrap_err();
    assert!(err.to_string().contains("terminated by signal"), "got: {err}");
}
