//! Asynchronous supervision of long-running external processes.
//!
//! `ProcessSupervisor::start` spawns a child and returns as soon as the OS
//! has created it. A dedicated tokio task then waits for the child to exit
//! and writes exactly one outcome into a oneshot channel owned by the
//! returned [`SupervisedProcess`]. Nothing is ever reported before the
//! child has actually terminated.
//!
//! There is no cancellation. Dropping a `SupervisedProcess` abandons the
//! notification; the monitoring task lingers until the child exits and the
//! child itself keeps running.

mod fan_in;

pub use fan_in::FanIn;

use crate::error::SupervisorError;
use std::ffi::OsStr;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Terminal outcome delivered by the monitoring task.
pub type ProcessOutcome = Result<(), SupervisorError>;

/// How a supervised child's stdout/stderr are wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the parent's terminal.
    #[default]
    Inherit,
    /// Send output to the null device.
    Discard,
}

impl StdioMode {
    fn stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Discard => Stdio::null(),
        }
    }
}

/// Observable lifecycle of a supervised process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Terminated { success: bool },
}

/// Launches external processes and hands back completion notifications.
#[derive(Debug, Clone, Default)]
pub struct ProcessSupervisor {
    stdio: StdioMode,
}

impl ProcessSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how children started by this supervisor handle output.
    pub fn with_stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }

    /// Spawn `program` with `args` and start monitoring it.
    ///
    /// Returns a spawn failure synchronously when the process could not be
    /// created. Otherwise returns immediately; the exit outcome arrives
    /// later through [`SupervisedProcess::wait`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<I, S>(&self, program: &str, args: I) -> Result<SupervisedProcess, SupervisorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        if program.trim().is_empty() {
            return Err(SupervisorError::EmptyProgram);
        }

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(self.stdio.stdio())
            .stderr(self.stdio.stdio());

        let mut child = cmd.spawn().map_err(|source| SupervisorError::Spawn {
            program: program.to_string(),
            source,
        })?;
        let pid = child.id();
        tracing::debug!(program, pid = ?pid, "spawned supervised process");

        let (tx, rx) = oneshot::channel();
        let name = program.to_string();
        tokio::spawn(async move {
            let outcome = match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::debug!(program = %name, "supervised process exited cleanly");
                    Ok(())
                }
                Ok(status) => {
                    tracing::debug!(program = %name, %status, "supervised process failed");
                    Err(SupervisorError::Exit {
                        program: name,
                        status,
                    })
                }
                Err(source) => Err(SupervisorError::Wait {
                    program: name,
                    source,
                }),
            };
            // The receiver may already be gone; that is the caller's choice.
            let _ = tx.send(outcome);
        });

        Ok(SupervisedProcess {
            program: program.to_string(),
            pid,
            done: rx,
            finished: None,
        })
    }
}

/// Handle to one running external process.
///
/// `wait` consumes the handle, so the single terminal notification can be
/// observed only once.
#[derive(Debug)]
pub struct SupervisedProcess {
    program: String,
    pid: Option<u32>,
    done: oneshot::Receiver<ProcessOutcome>,
    finished: Option<ProcessOutcome>,
}

impl SupervisedProcess {
    pub fn program(&self) -> &str {
        &self.program
    }

    /// OS process id, if the platform reported one at spawn time.
    pub fn id(&self) -> Option<u32> {
        self.pid
    }

    /// Peek at the lifecycle state without blocking.
    pub fn try_state(&mut self) -> ProcessState {
        if self.finished.is_none() {
            match self.done.try_recv() {
                Ok(outcome) => self.finished = Some(outcome),
                Err(TryRecvError::Empty) => return ProcessState::Running,
                Err(TryRecvError::Closed) => {
                    self.finished = Some(Err(self.monitor_lost()));
                }
            }
        }
        ProcessState::Terminated {
            success: matches!(self.finished, Some(Ok(()))),
        }
    }

    /// Suspend until the process terminates and return its outcome.
    pub async fn wait(mut self) -> ProcessOutcome {
        if let Some(outcome) = self.finished.take() {
            return outcome;
        }
        let lost = self.monitor_lost();
        match self.done.await {
            Ok(outcome) => outcome,
            Err(_) => Err(lost),
        }
    }

    fn monitor_lost(&self) -> SupervisorError {
        SupervisorError::MonitorLost {
            program: self.program.clone(),
        }
    }
}
