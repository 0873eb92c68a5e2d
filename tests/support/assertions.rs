//! Test assertion helpers.

use std::process::Output;

use dotenvx_ops::core::domain::KvMap;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert a mapping holds exactly `expected`, in order.
pub fn assert_entries(map: &KvMap, expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = map.iter().collect();
    assert_eq!(actual, expected, "entries differ");
}
