use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("jokegen-cli").unwrap()
}

#[test]
fn exit_choice_prints_farewell_and_exits_zero() {
    cmd()
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(contains("Thanks for using Joke Generator!"));
}

#[test]
fn closed_stdin_is_a_clean_exit() {
    cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Thanks for using Joke Generator!"));
}

#[test]
fn local_joke_session_needs_no_network() {
    cmd()
        .write_stdin("4\n\n6\n")
        .assert()
        .success()
        .stdout(contains("=== Hindi Joke ==="))
        .stdout(contains("Press Enter to continue..."));
}

#[cfg(unix)]
#[test]
fn interrupt_prints_farewell_and_exits_zero() {
    use std::process::{Command as StdCommand, Stdio};
    use std::time::Duration;

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("jokegen-cli"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // let it reach the menu prompt, then interrupt it
    std::thread::sleep(Duration::from_millis(1500));
    StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();

    let out = child.wait_with_output().unwrap();
    assert!(out.status.success(), "status: {:?}", out.status);
    assert!(String::from_utf8_lossy(&out.stdout).contains("Thanks for using Joke Generator!"));
}

#[test]
fn invalid_choice_warns_and_keeps_going() {
    cmd()
        .write_stdin("0\n6\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice!"))
        .stdout(contains("Thanks for using Joke Generator!"));
}
