use super::*;

#[test]
fn shell_runner_captures_stdout() {
    let out = ShellCommandRunner
        .output("echo", &["hello"])
        .expect("spawn echo");
    assert_eq!(out.trim(), "hello");
}

#[test]
fn shell_runner_returns_stdout_on_nonzero_exit() {
    // `sh -c` prints and then exits 3; the output must still come back.
    let out = ShellCommandRunner
        .output("sh", &["-c", "echo partial; exit 3"])
        .expect("spawn sh");
    assert_eq!(out.trim(), "partial");
}

#[test]
fn shell_runner_errors_when_command_is_missing() {
    let err = ShellCommandRunner
        .output("cis-posture-no-such-binary", &[])
        .expect_err("missing binary should fail to spawn");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
