use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{MEASURE_FLAG, MEASURE_SET};
use crate::error::EvalError;
use crate::source::Evaluator;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// trec_eval run as a child process: `<binary> -m all_trec <qrels> <run>`
#[derive(Debug, Clone)]
pub(crate) struct TrecEval {
    binary: String,
    timeout: Option<Duration>,
}

impl TrecEval {
    pub(crate) fn new(binary: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    fn spawn(&self, qrels: &Path, run: &Path) -> Result<Child, EvalError> {
        Command::new(&self.binary)
            .arg(MEASURE_FLAG)
            .arg(MEASURE_SET)
            .arg(qrels)
            .arg(run)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EvalError::NotFound {
                        binary: self.binary.clone(),
                    }
                } else {
                    EvalError::Spawn {
                        binary: self.binary.clone(),
                        source: e,
                    }
                }
            })
    }

    /// Poll the child until it exits or `limit` passes; the pipes are drained
    /// on helper threads so a chatty child cannot block on a full pipe.
    ///
    /// The deadline also covers the pipes: a background process that keeps
    /// stdout or stderr open past it fails the call like a hung child.
    fn wait_with_timeout(&self, mut child: Child, limit: Duration) -> Result<Output, EvalError> {
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);
        let deadline = Instant::now() + limit;
        let timed_out = || EvalError::Timeout {
            binary: self.binary.clone(),
            timeout: limit,
        };

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(timed_out());
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    return Err(EvalError::Wait {
                        binary: self.binary.clone(),
                        source,
                    });
                }
            }
        };

        Ok(Output {
            status,
            stdout: collect(stdout, deadline).ok_or_else(timed_out)?,
            stderr: collect(stderr, deadline).ok_or_else(timed_out)?,
        })
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(buf);
    });
    rx
}

/// Contents of a drained pipe, or `None` if it is still open at `deadline`
fn collect(pipe: Option<Receiver<Vec<u8>>>, deadline: Instant) -> Option<Vec<u8>> {
    match pipe {
        Some(rx) => rx
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .ok(),
        None => Some(Vec::new()),
    }
}

impl Evaluator for TrecEval {
    fn name(&self) -> &str {
        &self.binary
    }

    fn evaluate(&self, qrels: &Path, run: &Path) -> Result<String, EvalError> {
        tracing::debug!(
            "{} {} {} {} {}",
            self.binary,
            MEASURE_FLAG,
            MEASURE_SET,
            qrels.display(),
            run.display()
        );

        let child = self.spawn(qrels, run)?;
        let output = match self.timeout {
            Some(limit) => self.wait_with_timeout(child, limit)?,
            None => child.wait_with_output().map_err(|source| EvalError::Wait {
                binary: self.binary.clone(),
                source,
            })?,
        };

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|source| EvalError::Utf8 {
                binary: self.binary.clone(),
                source,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(EvalError::Failed {
                binary: self.binary.clone(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            })
        }
    }
}
