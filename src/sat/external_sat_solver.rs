use super::{CnfFormula, SatBackend, SatResponse};
use anyhow::{anyhow, Context, Result};
use std::{
    io::{BufRead, BufReader, Write},
    process::{Child, Command, Stdio},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);
const WATCHDOG_PERIOD: Duration = Duration::from_millis(100);

/// A SAT backend which execution is made by a system command.
///
/// The system command is composed by an executable program and a potential
/// list of CLI arguments. The solver must read a DIMACS CNF instance from its
/// standard input and answer on its standard output with the line-oriented
/// format of the SAT competitions (`c` comment lines, a single `s` status
/// line, `v` value lines).
///
/// The instance is fully written and the solver input closed before any
/// output is read, so the exchange is a strict request/response protocol.
/// A watchdog kills the subprocess if it exceeds a wall-clock timeout.
pub struct ExternalSatSolver {
    program: String,
    options: Vec<String>,
    timeout: Duration,
}

impl ExternalSatSolver {
    /// Builds a new external SAT backend.
    ///
    /// The `program` argument is the path from a directory in the execution
    /// path to the software to execute. The `options` parameter is the CLI
    /// options to provide to the software under execution.
    pub fn new(program: String, options: Vec<String>) -> Self {
        Self::new_with_timeout(program, options, DEFAULT_TIMEOUT)
    }

    /// Builds an external SAT backend with a custom wall-clock timeout.
    pub fn new_with_timeout(program: String, options: Vec<String>, timeout: Duration) -> Self {
        Self {
            program,
            options,
            timeout,
        }
    }

    fn command_string(&self) -> String {
        let mut s = self.program.clone();
        for o in &self.options {
            s.push(' ');
            s.push_str(o);
        }
        s
    }
}

impl SatBackend for ExternalSatSolver {
    fn solve(&self, cnf: &CnfFormula) -> Result<SatResponse> {
        let mut child = Command::new(&self.program)
            .args(&self.options)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!(r#"while spawning the SAT solver command "{}""#, self.command_string()))?;
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(cnf.to_string().as_bytes())
            .with_context(|| format!(r#"while sending the instance to "{}""#, self.command_string()))?;
        std::mem::drop(stdin);
        let stdout = child.stdout.take().unwrap();
        let timed_out = Arc::new(AtomicBool::new(false));
        let watchdog = spawn_watchdog(child, Arc::clone(&timed_out), self.timeout);
        let mut verdict = None;
        let mut model = vec![false; cnf.n_vars()];
        let mut seen_values = false;
        for line in BufReader::new(stdout).lines() {
            let line = line.with_context(|| {
                format!(r#"while reading the output of "{}""#, self.command_string())
            })?;
            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            if line.starts_with('s') {
                verdict = Some(!line.contains("UNSAT"));
                continue;
            }
            if let Some(values) = line.strip_prefix('v') {
                for word in values.split_ascii_whitespace() {
                    let n = word.parse::<isize>().with_context(|| {
                        format!(
                            r#""{}" is not a literal in the output of "{}""#,
                            word,
                            self.command_string()
                        )
                    })?;
                    seen_values = true;
                    if n == 0 {
                        continue;
                    }
                    let v = n.unsigned_abs();
                    if v > cnf.n_vars() {
                        return Err(anyhow!(
                            r#"variable {} in the output of "{}" is out of bounds (the instance has {} variables)"#,
                            v,
                            self.command_string(),
                            cnf.n_vars()
                        ));
                    }
                    if n > 0 {
                        model[v - 1] = true;
                    }
                }
            }
        }
        let _ = watchdog.join();
        match verdict {
            Some(false) => Ok(SatResponse::Unsatisfiable),
            Some(true) if seen_values => Ok(SatResponse::Model(model)),
            _ if timed_out.load(Ordering::SeqCst) => Ok(SatResponse::Timeout),
            _ => Err(anyhow!(
                "cannot communicate with the SAT solver (no usable output)\ncommand was: {}\ninstance was:\n{}",
                self.command_string(),
                cnf
            )),
        }
    }
}

// Reaps the subprocess, killing it first if it outlives the timeout.
fn spawn_watchdog(
    mut child: Child,
    timed_out: Arc<AtomicBool>,
    timeout: Duration,
) -> std::thread::JoinHandle<()> {
    let start = std::time::Instant::now();
    std::thread::spawn(move || loop {
        match child.try_wait() {
            Ok(Some(_)) | Err(_) => break,
            Ok(None) => {
                if start.elapsed() >= timeout {
                    timed_out.store(true, Ordering::SeqCst);
                    let _ = child.kill();
                    let _ = child.wait();
                    break;
                }
            }
        }
        std::thread::sleep(WATCHDOG_PERIOD);
    })
}
