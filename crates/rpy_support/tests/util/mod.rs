use std::process::{Command, Output};

/// Set in the environment of a test binary that was re-launched to run a single fatal test.
const CHILD_ENV: &str = "RPY_SUPPORT_FATAL_CHILD";

/// Runs `body` in a child process, because a fatal error takes the whole process down with it.
///
/// The current test binary is started again with a filter that selects only `test_name`, and the
/// environment tells that instance to execute `body`. Returns the child's output in the parent and
/// `None` in the child.
pub fn run_in_child<F: FnOnce()>(test_name: &str, body: F) -> Option<Output> {
    if std::env::var(CHILD_ENV).as_deref() == Ok(test_name) {
        body();
        return None;
    }

    let output = Command::new(std::env::current_exe().expect("no test binary"))
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .output()
        .expect("failed to launch child test process");
    Some(output)
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Asserts that `body` terminates the process with a diagnostic containing `message`.
macro_rules! assert_fatal {
    ($test_name:literal, $message:expr, $body:block) => {
        if let Some(output) = util::run_in_child($test_name, || $body) {
            let stderr = util::stderr_of(&output);
            assert!(
                !output.status.success(),
                "expected the process to abort, stderr: {stderr}"
            );
            assert!(
                stderr.contains($message),
                "expected `{}` in stderr: {stderr}",
                $message
            );
        }
    };
}

/// Asserts that `body` runs to completion without terminating the process.
macro_rules! assert_not_fatal {
    ($test_name:literal, $body:block) => {
        if let Some(output) = util::run_in_child($test_name, || $body) {
            let stderr = util::stderr_of(&output);
            assert!(output.status.success(), "unexpected abort, stderr: {stderr}");
            assert!(
                String::from_utf8_lossy(&output.stdout).contains("1 passed"),
                "the child did not run `{}`",
                $test_name
            );
            assert!(
                !stderr.contains(rpy_support::ABORT_MESSAGE),
                "unexpected diagnostic: {stderr}"
            );
        }
    };
}
