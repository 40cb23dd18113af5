//! Abstraction over external command execution.
//!
//! [`CommandRunner`] allows swapping the real system command execution
//! ([`SystemCommandRunner`]) with a mock in tests. This is necessary because
//! screen probing calls platform-specific CLI tools (powershell,
//! system_profiler, xrandr, xprop) that are unavailable in CI or on other
//! platforms. Injecting a [`CommandRunner`] makes every resolver testable
//! without touching real OS process spawning.
//!
//! A tool exiting non-zero is not an error at this level: whatever it wrote
//! to stdout is captured and returned, and the resolvers decide whether it is
//! usable. Only a failed spawn (typically a missing executable) surfaces as
//! `Err`, which resolvers treat the same as unusable output.

use anyhow::{Context, Result};

/// Trait for running external commands and capturing their stdout.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `cmd` with the given `args` and return its stdout as a [`String`].
    fn run(&self, cmd: &str, args: Vec<String>) -> Result<String>;
}

/// Default implementation that delegates to [`std::process::Command`].
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, cmd: &str, args: Vec<String>) -> Result<String> {
        let output = std::process::Command::new(cmd)
            .args(&args)
            .output()
            .with_context(|| format!("Running {cmd}"))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod should {
    use super::*;

    #[test]
    fn capture_stdout_of_a_successful_command() {
        let out = SystemCommandRunner
            .run("echo", vec!["hello".into()])
            .unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn not_error_on_non_zero_exit() {
        // `false` exits 1 without printing anything; the contract is that we
        // still get its (empty) stdout back rather than an error.
        let out = SystemCommandRunner.run("false", vec![]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn error_when_the_executable_is_missing() {
        assert!(SystemCommandRunner
            .run("definitely-not-a-real-tool", vec![])
            .is_err());
    }
}
