//! External command execution for e2e test cases
//!
//! Provides [`CommandRunner`], a synchronous process runner that executes
//! cluster tooling from the project root and captures stdout. The working
//! directory is set per invocation via `Command::current_dir`; the runner
//! never mutates the process-wide current directory, so concurrent runners
//! are safe.
//!
//! Every execution is echoed as a `running: <cmd>` line to the runner's log
//! writer (stderr by default), so test logs show exactly what was invoked.

use crate::errors::{CommandError, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, instrument, warn};

/// Resolve the project root directory
///
/// Returns the current directory with any trailing `test/e2e` suffix
/// stripped, so helpers invoked from within the e2e suite still run tooling
/// from the repository root.
pub fn project_dir() -> Result<PathBuf> {
    let wd = std::env::current_dir().map_err(CommandError::ProjectDir)?;
    Ok(strip_e2e_suffix(&wd))
}

fn strip_e2e_suffix(dir: &Path) -> PathBuf {
    if dir.ends_with("test/e2e") {
        if let Some(root) = dir.ancestors().nth(2) {
            return root.to_path_buf();
        }
    }
    dir.to_path_buf()
}

/// Runs external commands from the project root and captures their output
///
/// The log writer is an explicit dependency: production callers use stderr,
/// tests inject an in-memory buffer to assert on the emitted lines.
pub struct CommandRunner {
    project_root: PathBuf,
    log: Box<dyn Write + Send>,
}

impl CommandRunner {
    /// Create a runner rooted at the resolved project directory, logging to stderr
    pub fn new() -> Result<Self> {
        Ok(Self::with_writer(project_dir()?, Box::new(io::stderr())))
    }

    /// Create a runner with an explicit project root and log writer
    pub fn with_writer(project_root: PathBuf, log: Box<dyn Write + Send>) -> Self {
        Self { project_root, log }
    }

    /// The directory commands execute in
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Execute the prepared command synchronously and return captured stdout
    ///
    /// The command's working directory is set to the project root and
    /// `GO111MODULE=on` is appended to its environment (the controller under
    /// test is a Go module). Blocks until the child exits; there is no
    /// timeout, callers wrap with their own deadline if needed.
    ///
    /// A non-zero exit yields [`CommandError::ExitStatus`] carrying the
    /// rendered command line, the exit code, and captured stderr. A failure
    /// to start the child at all yields [`CommandError::Launch`].
    #[instrument(skip(self, cmd))]
    pub fn run(&mut self, cmd: &mut Command) -> Result<Vec<u8>> {
        let command = render_command(cmd);
        cmd.current_dir(&self.project_root).env("GO111MODULE", "on");

        let _ = writeln!(self.log, "running: {}", command);
        debug!("running: {}", command);

        let output = cmd.output().map_err(|source| CommandError::Launch {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            return Err(CommandError::ExitStatus {
                command,
                code,
                stderr,
            }
            .into());
        }

        Ok(output.stdout)
    }

    /// Log a non-fatal error as a `Warning: <err>` line without propagating it
    pub fn warn(&mut self, err: &dyn std::fmt::Display) {
        let _ = writeln!(self.log, "Warning: {}", err);
        warn!("{}", err);
    }
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("project_root", &self.project_root)
            .finish_non_exhaustive()
    }
}

/// Render a command as the space-joined program and argument list
fn render_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
