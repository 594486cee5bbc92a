//! Argolab is a SAT-based labelling engine for abstract argumentation frameworks.
//!
//! Extensions are computed under the complete, grounded, preferred, stable and
//! semi-stable semantics by encoding complete labellings into propositional CNF
//! and driving a SAT solver through blocking-clause enumeration loops.

#![warn(missing_docs)]

pub mod aa;

pub mod encodings;

pub mod io;

pub mod sat;

pub mod solvers;

pub mod utils;
