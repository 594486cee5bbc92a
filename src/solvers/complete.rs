//! The complete semantics driver.
//!
//! Every model of the base encoding is a complete labelling, so enumeration
//! is the plain solve/record/block loop applied to the seed formula.

use super::common::{blocking_clause, force_undec_growth, solve_labelling};
use super::Acceptance;
use crate::aa::{AAFramework, LabelType};
use crate::encodings::{encode_complete, in_literal, EncodingToggles};
use crate::sat::SatBackend;
use crate::utils::Labelling;
use anyhow::Result;
use log::debug;

pub(crate) fn extensions<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Vec<Labelling<'a, T>>>
where
    T: LabelType,
{
    let mut cnf = encode_complete(af, toggles);
    let mut result = Vec::new();
    while let Some(labelling) = solve_labelling(backend, &cnf, af)? {
        cnf.add_clause(blocking_clause(&labelling, af.n_arguments()));
        result.push(labelling);
    }
    debug!("enumerated {} complete labelling(s)", result.len());
    Ok(result)
}

pub(crate) fn some_extension<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Option<Labelling<'a, T>>>
where
    T: LabelType,
{
    let cnf = encode_complete(af, toggles);
    solve_labelling(backend, &cnf, af)
}

pub(crate) fn is_credulously_accepted<T>(
    af: &AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
    arg_id: usize,
) -> Result<bool>
where
    T: LabelType,
{
    let mut cnf = encode_complete(af, toggles);
    cnf.add_clause(vec![in_literal(arg_id)]);
    Ok(solve_labelling(backend, &cnf, af)?.is_some())
}

/// Skeptical acceptance under the complete semantics.
///
/// An argument belongs to every complete extension iff it belongs to the
/// grounded one, so the search shrinks the IN/OUT sets round after round: any
/// model not containing the argument refutes acceptance, and the loop stops
/// once a round yields the all-UNDEC labelling or no labelling with a larger
/// UNDEC set remains.
pub(crate) fn skeptical_acceptance<T>(
    af: &AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
    arg_id: usize,
) -> Result<Acceptance>
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut cnf = encode_complete(af, toggles);
    while let Some(labelling) = solve_labelling(backend, &cnf, af)? {
        if !labelling.has_in(arg_id) {
            return Ok(Acceptance::Rejected);
        }
        if labelling.undecs().len() == n {
            break;
        }
        force_undec_growth(&mut cnf, &labelling, n);
    }
    Ok(Acceptance::Accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use crate::sat::default_backend;

    fn framework(labels: &[&str], attacks: &[(&str, &str)]) -> AAFramework<String> {
        let labels = labels.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        for (from, to) in attacks {
            af.new_attack(&from.to_string(), &to.to_string()).unwrap();
        }
        af
    }

    fn extension_labels(labelling: &Labelling<String>) -> Vec<String> {
        labelling.ins().iter().map(|a| a.label().clone()).collect()
    }

    #[test]
    fn test_single_attack_has_unique_complete_labelling() {
        let af = framework(&["a", "b"], &[("a", "b")]);
        let exts = extensions(&af, &EncodingToggles::default(), default_backend().as_ref()).unwrap();
        assert_eq!(1, exts.len());
        assert_eq!(vec!["a"], extension_labels(&exts[0]));
        assert!(exts[0].undecs().is_empty());
    }

    #[test]
    fn test_symmetric_attack_has_three_complete_labellings() {
        let af = framework(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let exts = extensions(&af, &EncodingToggles::default(), default_backend().as_ref()).unwrap();
        assert_eq!(3, exts.len());
        let mut ins = exts.iter().map(extension_labels).collect::<Vec<_>>();
        ins.sort();
        assert_eq!(
            vec![vec![] as Vec<String>, vec!["a".to_string()], vec!["b".to_string()]],
            ins
        );
    }

    #[test]
    fn test_empty_framework_has_one_empty_labelling() {
        let af = framework(&[], &[]);
        let exts = extensions(&af, &EncodingToggles::default(), default_backend().as_ref()).unwrap();
        assert_eq!(1, exts.len());
        assert!(exts[0].ins().is_empty());
    }

    #[test]
    fn test_some_extension_always_exists() {
        let af = framework(&["a"], &[("a", "a")]);
        let labelling = some_extension(&af, &EncodingToggles::default(), default_backend().as_ref())
            .unwrap()
            .unwrap();
        assert!(labelling.ins().is_empty());
        assert_eq!(1, labelling.undecs().len());
    }

    #[test]
    fn test_credulous_acceptance() {
        let af = framework(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let toggles = EncodingToggles::default();
        let backend = default_backend();
        assert!(is_credulously_accepted(&af, &toggles, backend.as_ref(), 0).unwrap());
        assert!(is_credulously_accepted(&af, &toggles, backend.as_ref(), 1).unwrap());
    }

    #[test]
    fn test_credulous_acceptance_rejects_self_attacker() {
        let af = framework(&["a"], &[("a", "a")]);
        assert!(
            !is_credulously_accepted(&af, &EncodingToggles::default(), default_backend().as_ref(), 0)
                .unwrap()
        );
    }

    #[test]
    fn test_skeptical_acceptance_accepts_unattacked() {
        let af = framework(&["a", "b"], &[("a", "b")]);
        let toggles = EncodingToggles::default();
        let backend = default_backend();
        assert_eq!(
            Acceptance::Accepted,
            skeptical_acceptance(&af, &toggles, backend.as_ref(), 0).unwrap()
        );
        assert_eq!(
            Acceptance::Rejected,
            skeptical_acceptance(&af, &toggles, backend.as_ref(), 1).unwrap()
        );
    }

    #[test]
    fn test_skeptical_acceptance_rejects_in_symmetric_pair() {
        let af = framework(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let toggles = EncodingToggles::default();
        let backend = default_backend();
        assert_eq!(
            Acceptance::Rejected,
            skeptical_acceptance(&af, &toggles, backend.as_ref(), 0).unwrap()
        );
    }
}
