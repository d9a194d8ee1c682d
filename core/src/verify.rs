use std::{
    path::PathBuf,
    process::{ExitStatus, Stdio},
};

use anyhow::Context as _;
use tokio::{io::AsyncWriteExt as _, process::Command};

/// Transient per-testcase result, consumed immediately for rendering.
/// stdout and stderr are captured separately, never merged.
#[derive(Debug)]
pub struct ExecutionResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct Runner {
    artifact: PathBuf,
}

impl Runner {
    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
        }
    }

    /// Executes the artifact once, feeding the untrimmed `input` on stdin.
    /// No timeout: the child runs to its own natural exit. A non-zero exit
    /// is not an `Err`; callers render it and move on.
    pub async fn run(&self, input: &str) -> anyhow::Result<ExecutionResult> {
        let mut proc = Command::new(&self.artifact)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn '{}'", self.artifact.display()))?;

        let mut stdin = proc.stdin.take().context("Failed to open stdin")?;
        match stdin.write_all(input.as_bytes()).await {
            // A child may exit without draining stdin; its exit status is
            // still the outcome to report.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => (),
            res => res.context("Failed to pass input-data to stdin")?,
        }
        drop(stdin); // close the pipe so the child sees EOF

        let out = proc
            .wait_with_output()
            .await
            .context("Failed to communicate with subprocess")?;

        Ok(ExecutionResult {
            status: out.status,
            stdout: String::from_utf8_lossy(&out.stdout).into(),
            stderr: String::from_utf8_lossy(&out.stderr).into(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn captures_stdout_of_a_well_behaved_child() {
        let res = Runner::new("/bin/cat").run("1 2\n3\n").await.unwrap();
        assert!(res.status.success());
        assert_eq!(res.stdout, "1 2\n3\n");
        assert_eq!(res.stderr, "");
    }

    #[tokio::test]
    async fn nonzero_exit_is_an_outcome_not_an_error() {
        let res = Runner::new("/bin/false").run("").await.unwrap();
        assert!(!res.status.success());
    }

    #[tokio::test]
    async fn child_exiting_before_reading_stdin_is_an_outcome_not_an_error() {
        let dir = std::env::temp_dir().join(format!("comp-verify-early-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let script = dir.join("quit.sh");
        fs::write(&script, "#!/bin/sh\nexit 1\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt as _;
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        }

        // Larger than the pipe buffer, so the write hits the closed pipe.
        let input = "x".repeat(1 << 20);
        let res = Runner::new(&script).run(&input).await.unwrap();
        assert_eq!(res.status.code(), Some(1));
        assert_eq!(res.stdout, "");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn stderr_and_exit_code_are_captured_separately() {
        let dir = std::env::temp_dir().join(format!("comp-verify-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let script = dir.join("err.sh");
        fs::write(&script, "#!/bin/sh\ncat\necho oops >&2\nexit 3\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt as _;
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let res = Runner::new(&script).run("echoed\n").await.unwrap();
        assert_eq!(res.stdout, "echoed\n");
        assert_eq!(res.stderr, "oops\n");
        assert_eq!(res.status.code(), Some(3));

        fs::remove_dir_all(&dir).unwrap();
    }
}
