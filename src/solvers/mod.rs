//! Solvers for extension and acceptance queries under the Dung semantics.

mod common;
mod complete;
mod grounded;
mod preferred;
mod semi_stable;
mod specs;
mod stable;

pub use specs::Acceptance;
pub use specs::SemanticsSolver;
