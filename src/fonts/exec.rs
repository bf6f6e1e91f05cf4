//! External command execution
//!
//! Runs an OS utility, captures stdout with a size cap, and fails closed on
//! timeout or non-zero exit. The child is killed if the timeout fires or the
//! caller drops the future.

use std::process::Stdio;

use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::fonts::DetectError;

/// Run `program` with `args` and return its stdout as text.
///
/// Fails if the process cannot be spawned, exits non-zero, takes longer than
/// `timeout_secs`, or writes more than `max_output_bytes` to stdout.
pub async fn run_bounded(
    program: &str,
    args: &[&str],
    max_output_bytes: usize,
    timeout_secs: u64,
) -> Result<String, DetectError> {
    let rendered = render_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = match timeout(Duration::from_secs(timeout_secs), cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            return Err(DetectError::Spawn {
                command: rendered,
                source,
            })
        }
        Err(_) => {
            return Err(DetectError::Timeout {
                command: rendered,
                seconds: timeout_secs,
            })
        }
    };

    if !output.status.success() {
        return Err(DetectError::CommandFailed {
            command: rendered,
            code: output.status.code().unwrap_or(-1),
        });
    }

    if output.stdout.len() > max_output_bytes {
        return Err(DetectError::OutputTooLarge {
            command: rendered,
            limit: max_output_bytes,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
