//! Utilities shared by the semantics solvers.

mod labelling;

pub use labelling::Labelling;
