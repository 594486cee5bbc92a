use super::{complete, grounded, preferred, semi_stable, stable};
use crate::aa::{AAFramework, LabelType, Semantics};
use crate::encodings::EncodingToggles;
use crate::sat::{default_backend, SatBackend};
use crate::utils::Labelling;
use anyhow::Result;

/// The answer to a skeptical acceptance query.
///
/// Under the stable semantics a framework may have no extension at all; this
/// outcome is reported apart from the vacuous acceptance it implies, so that
/// a caller can tell "the argument is in every extension" from "there is no
/// extension to be in".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// The argument belongs to every extension.
    Accepted,
    /// Some extension does not contain the argument.
    Rejected,
    /// The framework has no extension under the queried semantics.
    NoExtension,
}

/// A solver for extension and acceptance queries under a fixed semantics.
///
/// The solver borrows the framework, which stays immutable; each query
/// rebuilds its encoding, so a single solver can serve any number of
/// successive queries.
///
/// # Example
///
/// ```
/// # use argolab::aa::{AAFramework, ArgumentSet, Semantics};
/// # use argolab::solvers::SemanticsSolver;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let mut af = AAFramework::new_with_argument_set(arguments);
/// af.new_attack(&"a", &"b").unwrap();
/// let solver = SemanticsSolver::new(&af, Semantics::PR);
/// let extensions = solver.extensions().unwrap();
/// assert_eq!(1, extensions.len());
/// ```
pub struct SemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    semantics: Semantics,
    toggles: EncodingToggles,
    backend: Box<dyn SatBackend>,
}

impl<'a, T> SemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a solver with the default encoding toggles and the embedded
    /// SAT backend.
    pub fn new(af: &'a AAFramework<T>, semantics: Semantics) -> Self {
        Self {
            af,
            semantics,
            toggles: EncodingToggles::default(),
            backend: default_backend(),
        }
    }

    /// Replaces the encoding toggles.
    pub fn with_toggles(mut self, toggles: EncodingToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Replaces the SAT backend.
    pub fn with_backend(mut self, backend: Box<dyn SatBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Enumerates all the extensions of the framework.
    pub fn extensions(&self) -> Result<Vec<Labelling<'a, T>>> {
        match self.semantics {
            Semantics::CO => complete::extensions(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::GR => grounded::extensions(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::PR => preferred::extensions(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::ST => stable::extensions(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::SST => {
                semi_stable::extensions(self.af, &self.toggles, self.backend.as_ref())
            }
        }
    }

    /// Computes one extension of the framework, or `None` if it has none.
    pub fn some_extension(&self) -> Result<Option<Labelling<'a, T>>> {
        match self.semantics {
            Semantics::CO => complete::some_extension(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::GR => grounded::some_extension(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::PR => {
                preferred::some_extension(self.af, &self.toggles, self.backend.as_ref())
            }
            Semantics::ST => stable::some_extension(self.af, &self.toggles, self.backend.as_ref()),
            Semantics::SST => {
                semi_stable::some_extension(self.af, &self.toggles, self.backend.as_ref())
            }
        }
    }

    /// Checks whether the argument with the given label belongs to at least
    /// one extension.
    pub fn is_credulously_accepted(&self, arg: &T) -> Result<bool> {
        let arg_id = self.af.argument_set().get_argument_index(arg)?;
        match self.semantics {
            Semantics::CO => {
                complete::is_credulously_accepted(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::GR => {
                grounded::is_credulously_accepted(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::PR => {
                preferred::is_credulously_accepted(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::ST => {
                stable::is_credulously_accepted(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::SST => semi_stable::is_credulously_accepted(
                self.af,
                &self.toggles,
                self.backend.as_ref(),
                arg_id,
            ),
        }
    }

    /// Checks whether the argument with the given label belongs to every
    /// extension.
    pub fn skeptical_acceptance(&self, arg: &T) -> Result<Acceptance> {
        let arg_id = self.af.argument_set().get_argument_index(arg)?;
        match self.semantics {
            Semantics::CO => {
                complete::skeptical_acceptance(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::GR => {
                grounded::skeptical_acceptance(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::PR => {
                preferred::skeptical_acceptance(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::ST => {
                stable::skeptical_acceptance(self.af, &self.toggles, self.backend.as_ref(), arg_id)
            }
            Semantics::SST => semi_stable::skeptical_acceptance(
                self.af,
                &self.toggles,
                self.backend.as_ref(),
                arg_id,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use paste::paste;
    use std::collections::BTreeSet;

    fn framework(labels: &[&str], attacks: &[(&str, &str)]) -> AAFramework<String> {
        let labels = labels.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        for (from, to) in attacks {
            af.new_attack(&from.to_string(), &to.to_string()).unwrap();
        }
        af
    }

    fn in_sets(af: &AAFramework<String>, semantics: Semantics, toggles_str: &str) -> BTreeSet<BTreeSet<String>> {
        SemanticsSolver::new(af, semantics)
            .with_toggles(EncodingToggles::try_from(toggles_str).unwrap())
            .extensions()
            .unwrap()
            .iter()
            .map(|labelling| {
                labelling
                    .ins()
                    .iter()
                    .map(|a| a.label().clone())
                    .collect::<BTreeSet<_>>()
            })
            .collect()
    }

    fn sample_frameworks() -> Vec<AAFramework<String>> {
        vec![
            framework(&["a", "b"], &[("a", "b")]),
            framework(&["a", "b"], &[("a", "b"), ("b", "a")]),
            framework(&["a"], &[("a", "a")]),
            framework(&[], &[]),
            framework(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]),
            framework(
                &["a", "b", "c", "d"],
                &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "c")],
            ),
        ]
    }

    macro_rules! inclusion_tests {
        ($($toggles:literal),+) => {
            $(paste! {
                #[test]
                fn [<test_extension_inclusions_with_toggles_ $toggles>]() {
                    for af in sample_frameworks() {
                        let toggles = stringify!($toggles);
                        let complete = in_sets(&af, Semantics::CO, toggles);
                        let preferred = in_sets(&af, Semantics::PR, toggles);
                        let stable = in_sets(&af, Semantics::ST, toggles);
                        let semi_stable = in_sets(&af, Semantics::SST, toggles);
                        let grounded = in_sets(&af, Semantics::GR, toggles);
                        assert!(preferred.is_subset(&complete));
                        assert!(stable.is_subset(&preferred));
                        assert!(semi_stable.is_subset(&preferred));
                        assert_eq!(1, grounded.len());
                        let grounded_in = grounded.iter().next().unwrap();
                        for ext in &complete {
                            assert!(grounded_in.is_subset(ext));
                        }
                    }
                }
            })+
        };
    }

    inclusion_tests!(101010, 111111);

    #[test]
    fn test_symmetric_pair_all_semantics() {
        let af = framework(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let two = |l: &str, r: &str| {
            BTreeSet::from([
                BTreeSet::from([l.to_string()]),
                BTreeSet::from([r.to_string()]),
            ])
        };
        assert_eq!(
            BTreeSet::from([BTreeSet::new()]),
            in_sets(&af, Semantics::GR, "101010")
        );
        assert_eq!(two("a", "b"), in_sets(&af, Semantics::PR, "101010"));
        assert_eq!(two("a", "b"), in_sets(&af, Semantics::ST, "101010"));
        assert_eq!(two("a", "b"), in_sets(&af, Semantics::SST, "101010"));
    }

    #[test]
    fn test_acceptance_queries_resolve_labels() {
        let af = framework(&["a", "b"], &[("a", "b")]);
        let solver = SemanticsSolver::new(&af, Semantics::CO);
        assert!(solver.is_credulously_accepted(&"a".to_string()).unwrap());
        assert!(!solver.is_credulously_accepted(&"b".to_string()).unwrap());
        assert!(solver.is_credulously_accepted(&"z".to_string()).is_err());
        assert_eq!(
            Acceptance::Accepted,
            solver.skeptical_acceptance(&"a".to_string()).unwrap()
        );
    }

    #[test]
    fn test_some_extension_under_each_semantics() {
        let af = framework(&["a", "b"], &[("a", "b")]);
        for semantics in [
            Semantics::CO,
            Semantics::GR,
            Semantics::PR,
            Semantics::ST,
            Semantics::SST,
        ] {
            let labelling = SemanticsSolver::new(&af, semantics)
                .some_extension()
                .unwrap()
                .unwrap();
            assert!(labelling.has_in(0));
        }
    }
}
