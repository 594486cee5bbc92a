//! Abstract Argumentation frameworks and problems.

mod aa_framework;
mod arguments;
mod problem;

pub use aa_framework::AAFramework;
pub use aa_framework::Attack;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;
pub use problem::read_problem_string;
pub use problem::Query;
pub use problem::Semantics;
