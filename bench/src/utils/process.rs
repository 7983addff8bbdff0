use crate::error::BenchError;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, warn};

/// A child process that is interrupted, then killed if it overstays the grace
/// period. Dropping it kills the process.
#[derive(Debug)]
pub struct ManagedProcess {
    name: String,
    child: Child,
}

impl ManagedProcess {
    pub fn spawn(name: &str, mut command: Command, verbose: bool) -> Result<Self, BenchError> {
        if !verbose {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
        let child = command
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| BenchError::CannotSpawnProcess {
                name: name.to_string(),
                source,
            })?;
        debug!("Spawned {name} with pid: {:?}", child.id());
        Ok(Self {
            name: name.to_string(),
            child,
        })
    }

    /// `None` once the process has been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    pub async fn wait(&mut self) -> Result<ExitStatus, BenchError> {
        Ok(self.child.wait().await?)
    }

    /// Waits up to `grace` for the process to exit on its own.
    pub async fn wait_for(&mut self, grace: Duration) -> Result<Option<ExitStatus>, BenchError> {
        match timeout(grace, self.child.wait()).await {
            Ok(status) => Ok(Some(status?)),
            Err(_) => Ok(None),
        }
    }

    /// Sends SIGINT, waits up to `grace` and kills the process if it is still
    /// running.
    pub async fn stop(mut self, grace: Duration) -> Result<ExitStatus, BenchError> {
        if let Some(status) = self.child.try_wait()? {
            debug!("{} already exited with: {status}", self.name);
            return Ok(status);
        }

        if let Some(pid) = self.id() {
            match kill(Pid::from_raw(pid as i32), Signal::SIGINT) {
                Ok(()) | Err(Errno::ESRCH) => {}
                Err(error) => return Err(error.into()),
            }
        }

        if let Some(status) = self.wait_for(grace).await? {
            debug!("{} stopped with: {status}", self.name);
            return Ok(status);
        }

        warn!(
            "{} did not exit within {grace:?} after SIGINT, killing it.",
            self.name
        );
        self.child.kill().await?;
        Ok(self.child.wait().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stop_should_interrupt_running_process() {
        let mut command = Command::new("sleep");
        command.arg("30");
        let process = ManagedProcess::spawn("sleep", command, false).unwrap();

        let status = process.stop(Duration::from_secs(5)).await.unwrap();
        assert!(!status.success());
    }

    #[tokio::test]
    async fn stop_should_kill_process_ignoring_sigint() {
        let mut command = Command::new("sh");
        command.args(["-c", "trap '' INT; sleep 30"]);
        let process = ManagedProcess::spawn("stubborn", command, false).unwrap();

        let status = tokio::time::timeout(
            Duration::from_secs(10),
            process.stop(Duration::from_millis(200)),
        )
        .await
        .unwrap()
        .unwrap();
        assert!(!status.success());
    }

    #[tokio::test]
    async fn stop_should_return_status_of_exited_process() {
        let mut command = Command::new("true");
        command.kill_on_drop(true);
        let mut process = ManagedProcess::spawn("true", command, false).unwrap();
        process.wait().await.unwrap();

        let status = process.stop(Duration::from_secs(1)).await.unwrap();
        assert!(status.success());
    }
}
