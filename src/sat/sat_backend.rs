use super::CnfFormula;
use anyhow::Result;

/// The outcome of a single SAT solver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResponse {
    /// The formula is satisfiable; the model gives the truth value of each
    /// variable, indexed by the 0-based variable index.
    Model(Vec<bool>),
    /// The formula was proved unsatisfiable.
    Unsatisfiable,
    /// The solver gave up before reaching a verdict.
    ///
    /// This outcome is deliberately kept apart from [SatResponse::Unsatisfiable]:
    /// reporting a timeout as the absence of a model would silently turn an
    /// unfinished search into a wrong answer.
    Timeout,
}

/// A trait for SAT solver backends.
///
/// A backend solves a self-contained [`CnfFormula`]; it retains no state
/// between calls. Callers are oblivious to whether the solving happens
/// in-process or in an external subprocess.
pub trait SatBackend {
    /// Solves the given formula.
    ///
    /// Errors are reserved for failures of the solving machinery itself
    /// (typically an external process which cannot be run or which breaks
    /// the output protocol); unsatisfiability and timeouts are regular
    /// [`SatResponse`] values.
    fn solve(&self, cnf: &CnfFormula) -> Result<SatResponse>;
}

/// The default SAT backend (the embedded Cadical solver).
pub fn default_backend() -> Box<dyn SatBackend> {
    Box::new(super::EmbeddedSatSolver::default())
}
