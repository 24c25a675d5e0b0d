//! Subprocess execution with finite deadlines
//!
//! `std::process` has no built-in timeout, so the runner polls `try_wait`
//! against a deadline and kills the child when it expires. Output is captured
//! from temp files to avoid pipe-buffer deadlocks with chatty tools like npm.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Outcome of a command run under a deadline
#[derive(Debug)]
pub enum RunOutcome {
    /// Process exited on its own
    Exited {
        success: bool,
        stdout: String,
        stderr: String,
    },
    /// Deadline expired and the process was killed
    TimedOut,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        matches!(self, RunOutcome::Exited { success: true, .. })
    }

    pub fn timed_out(&self) -> bool {
        matches!(self, RunOutcome::TimedOut)
    }

    pub fn stdout(&self) -> &str {
        match self {
            RunOutcome::Exited { stdout, .. } => stdout,
            RunOutcome::TimedOut => "",
        }
    }

    pub fn stderr(&self) -> &str {
        match self {
            RunOutcome::Exited { stderr, .. } => stderr,
            RunOutcome::TimedOut => "",
        }
    }
}

/// Run a command in `cwd` with the given deadline, capturing output.
pub fn run_with_deadline(
    program: &str,
    args: &[&str],
    cwd: &Path,
    deadline: Duration,
) -> Result<RunOutcome> {
    let mut stdout_file = tempfile::tempfile()?;
    let mut stderr_file = tempfile::tempfile()?;

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_file.try_clone()?))
        .stderr(Stdio::from(stderr_file.try_clone()?))
        .spawn()?;

    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            let mut stdout = String::new();
            let mut stderr = String::new();
            read_from_start(&mut stdout_file, &mut stdout)?;
            read_from_start(&mut stderr_file, &mut stderr)?;
            return Ok(RunOutcome::Exited {
                success: status.success(),
                stdout,
                stderr,
            });
        }
        if started.elapsed() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(RunOutcome::TimedOut);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn read_from_start(file: &mut std::fs::File, buf: &mut String) -> std::io::Result<()> {
    use std::io::Seek;
    file.rewind()?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    buf.push_str(&String::from_utf8_lossy(&bytes));
    Ok(())
}
