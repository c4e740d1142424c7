use async_trait::async_trait;
use rblcheck_application::ports::{QueryResolver, ResolverExit};
use rblcheck_domain::{DomainError, QueryName, ResolverConfig};
use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::process::{ChildStdin, Command};
use tracing::{debug, info, warn};

/// Feeds query names to the external bulk resolver over its stdin.
///
/// The resolver runs in forward-address mode and writes its results straight
/// to our stdout/stderr. Its exit code becomes the run's exit code.
pub struct ProcessResolverBridge {
    config: ResolverConfig,
}

impl ProcessResolverBridge {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .args(self.config.command_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

#[async_trait]
impl QueryResolver for ProcessResolverBridge {
    async fn resolve(&self, queries: Vec<QueryName>) -> Result<ResolverExit, DomainError> {
        let args: Vec<&str> = self.config.command_args().collect();
        info!(program = %self.config.program, ?args, queries = queries.len(), "Starting resolver");

        let mut child = self
            .command()
            .spawn()
            .map_err(|e| DomainError::ResolverUnavailable {
                program: self.config.program.clone(),
                reason: e.to_string(),
            })?;

        let fed = match child.stdin.take() {
            Some(stdin) => feed(stdin, &queries).await,
            None => Ok(0),
        };

        let status = child
            .wait()
            .await
            .map_err(|e| DomainError::ResolverIo(format!("Failed to wait for resolver: {e}")))?;

        let exit = ResolverExit::new(exit_code(status));
        debug!(%status, code = exit.code, "Resolver terminated");
        settle(fed, exit)
    }
}

/// Combine the feed result with the resolver's exit status.
///
/// A closed pipe leaves the outcome to the resolver. Any other write failure
/// turns a successful exit into an error, since some names were never sent.
fn settle(fed: io::Result<usize>, exit: ResolverExit) -> Result<ResolverExit, DomainError> {
    match fed {
        Ok(written) => {
            debug!(written, "Resolver input closed");
            Ok(exit)
        }
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            warn!("Resolver exited before reading all queries");
            Ok(exit)
        }
        Err(e) if exit.is_success() => Err(DomainError::ResolverIo(format!(
            "Failed to write queries to resolver: {e}"
        ))),
        Err(e) => {
            warn!(error = %e, "Failed to write queries to resolver");
            Ok(exit)
        }
    }
}

/// Write one name per line, then close the pipe by dropping it.
async fn feed(stdin: ChildStdin, queries: &[QueryName]) -> io::Result<usize> {
    let mut writer = BufWriter::new(stdin);
    for query in queries {
        writer.write_all(query.as_str().as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(queries.len())
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_exit_code_from_normal_exit() {
        // Raw wait status: exit code lives in the high byte.
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
    }

    #[test]
    fn test_settle_keeps_exit_after_closed_pipe() {
        let fed = Err(io::Error::from(io::ErrorKind::BrokenPipe));

        assert_eq!(settle(fed, ResolverExit::SUCCESS).unwrap(), ResolverExit::SUCCESS);
    }

    #[test]
    fn test_settle_fails_successful_run_on_write_error() {
        let fed = Err(io::Error::other("input/output error"));

        let err = settle(fed, ResolverExit::SUCCESS).unwrap_err();

        assert!(matches!(err, DomainError::ResolverIo(ref m) if m.contains("input/output error")));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_settle_keeps_resolver_failure_code_on_write_error() {
        let fed = Err(io::Error::other("input/output error"));

        assert_eq!(settle(fed, ResolverExit::new(2)).unwrap().code, 2);
    }

    #[test]
    fn test_settle_passes_clean_feed_through() {
        assert_eq!(settle(Ok(3), ResolverExit::new(4)).unwrap().code, 4);
    }

    #[test]
    fn test_exit_code_from_signal() {
        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }
}
