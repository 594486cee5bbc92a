use super::Literal;
use std::fmt::Display;

/// An opaque position in a [`CnfFormula`] clause sequence.
///
/// Checkpoints are produced by [`CnfFormula::checkpoint`] and consumed by
/// [`CnfFormula::rollback`], allowing a driver to explore an alternative
/// branch of clauses and then discard it without cloning the whole formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CnfCheckpoint(usize);

/// A CNF formula given as an ordered sequence of clauses.
///
/// The number of variables is fixed at construction time; clauses are
/// append-only except for the checkpoint/rollback mechanism.
/// Clauses are never deduplicated.
///
/// The [Display] implementation renders the formula in the DIMACS CNF text
/// format, suitable as the input of an external SAT solver process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    n_vars: usize,
    clauses: Vec<Vec<Literal>>,
}

impl CnfFormula {
    /// Builds a new formula over a fixed number of variables, with no clause.
    pub fn new_with_n_vars(n_vars: usize) -> Self {
        Self {
            n_vars,
            clauses: Vec::new(),
        }
    }

    /// Appends a clause to the formula.
    ///
    /// # Panics
    ///
    /// Panics if a literal refers to a variable beyond the declared count.
    pub fn add_clause(&mut self, cl: Vec<Literal>) {
        debug_assert!(cl.iter().all(|l| l.var() <= self.n_vars));
        self.clauses.push(cl);
    }

    /// Returns the number of variables the formula is defined on.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Returns the number of clauses appended so far.
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Provides an iterator over the clauses, in insertion order.
    pub fn iter_clauses(&self) -> impl Iterator<Item = &[Literal]> + '_ {
        self.clauses.iter().map(|cl| cl.as_slice())
    }

    /// Records the current clause count for a later [rollback](Self::rollback).
    pub fn checkpoint(&self) -> CnfCheckpoint {
        CnfCheckpoint(self.clauses.len())
    }

    /// Removes every clause appended after the given checkpoint was taken.
    pub fn rollback(&mut self, checkpoint: CnfCheckpoint) {
        self.clauses.truncate(checkpoint.0);
    }
}

impl Display for CnfFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.n_vars, self.clauses.len())?;
        for cl in &self.clauses {
            for l in cl {
                write!(f, "{} ", l)?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}
