use super::{CnfFormula, SatBackend, SatResponse};
use anyhow::Result;
use cadical::Solver as CadicalSolver;

const DEFAULT_TIMEOUT_SECS: f32 = 3600.;

/// A SAT backend built on the embedded Cadical solver.
///
/// Each call to [solve](SatBackend::solve) instantiates a fresh solver, feeds
/// it the whole formula and runs it under a wall-clock timeout.
pub struct EmbeddedSatSolver {
    timeout_secs: f32,
}

impl EmbeddedSatSolver {
    /// Builds a backend with a custom wall-clock timeout, in seconds.
    pub fn new_with_timeout(timeout_secs: f32) -> Self {
        Self { timeout_secs }
    }
}

impl Default for EmbeddedSatSolver {
    fn default() -> Self {
        Self::new_with_timeout(DEFAULT_TIMEOUT_SECS)
    }
}

impl SatBackend for EmbeddedSatSolver {
    fn solve(&self, cnf: &CnfFormula) -> Result<SatResponse> {
        let mut solver: CadicalSolver = CadicalSolver::default();
        solver.set_callbacks(Some(cadical::Timeout::new(self.timeout_secs)));
        for cl in cnf.iter_clauses() {
            solver.add_clause(cl.iter().map(|l| isize::from(*l) as i32));
        }
        match solver.solve() {
            Some(true) => {
                let mut model = vec![false; cnf.n_vars()];
                for v in 1..=solver.max_variable() {
                    if solver.value(v) == Some(true) {
                        model[v as usize - 1] = true;
                    }
                }
                Ok(SatResponse::Model(model))
            }
            Some(false) => Ok(SatResponse::Unsatisfiable),
            None => Ok(SatResponse::Timeout),
        }
    }
}
