//! Shell-command-backed executor.

use anyhow::{bail, Context, Result};
use tokio::process::Command;

use super::Executor;

/// Environment variable through which the child command receives the input
/// on every platform. On Unix the input is additionally passed as `$1`.
pub const INPUT_ENV: &str = "ERUN_INPUT";

/// Runs a user-named command through the platform shell and treats its
/// captured stdout as the executed result.
///
/// Contract with the child process:
/// - the input string arrives as `$1` (Unix) and as `ERUN_INPUT` (all
///   platforms);
/// - stdout, with one trailing newline removed, is the resolved value;
/// - a non-zero exit status is a failure, reported with the child's stderr.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    cmd: String,
    shell_override: Option<String>,
}

impl CommandExecutor {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into(), shell_override: None }
    }

    /// Force a specific shell instead of the SHELL / platform default.
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell_override = Some(shell.into());
        self
    }

    fn build_command(&self, input: &str) -> Command {
        let mut c = if cfg!(windows) {
            let override_shell = self
                .shell_override
                .clone()
                .unwrap_or_default()
                .to_ascii_lowercase();
            let prefer_ps = if override_shell.contains("powershell") {
                true
            } else if override_shell.contains("cmd") {
                false
            } else {
                // Fallback heuristic: if PSModulePath exists, prefer PowerShell
                !std::env::var("PSModulePath").unwrap_or_default().is_empty()
            };
            if prefer_ps {
                let mut c = Command::new("powershell.exe");
                c.args(["-NoLogo", "-NoProfile", "-Command", &self.cmd]);
                c
            } else {
                let mut c = Command::new("cmd.exe");
                c.args(["/c", &self.cmd]);
                c
            }
        } else {
            let shell = match &self.shell_override {
                Some(s) if s != "auto" => s.clone(),
                _ => std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".into()),
            };
            let mut c = Command::new(shell);
            // `sh -c CMD NAME ARG` makes ARG visible to CMD as $1.
            c.arg("-c").arg(&self.cmd).arg("erun").arg(input);
            c
        };
        c.env(INPUT_ENV, input);
        c
    }
}

impl Executor for CommandExecutor {
    type Output = String;

    async fn execute(&self, input: &str) -> Result<String> {
        let output = self
            .build_command(input)
            .output()
            .await
            .with_context(|| format!("failed to spawn executor command: {}", self.cmd))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "executor command exited with {}: {}",
                output.status,
                stderr.trim_end()
            );
        }

        let mut text = String::from_utf8(output.stdout)
            .context("executor command produced non-UTF-8 output")?;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}
