//! SAT related structures and solver backends.

mod cnf;
mod embedded_sat_solver;
mod external_sat_solver;
mod literal;
mod sat_backend;

pub use cnf::CnfCheckpoint;
pub use cnf::CnfFormula;
pub use embedded_sat_solver::EmbeddedSatSolver;
pub use external_sat_solver::ExternalSatSolver;
pub use literal::Literal;
pub use sat_backend::default_backend;
pub use sat_backend::SatBackend;
pub use sat_backend::SatResponse;
