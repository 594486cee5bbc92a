//! The stable semantics driver.
//!
//! Stable labellings are exactly the complete labellings with an empty UNDEC
//! set, so the seed formula is the complete encoding augmented with one
//! "not UNDEC" unit per argument. Unlike the other semantics, a framework
//! may have no stable labelling at all.

use super::common::{blocking_clause, solve_labelling};
use super::Acceptance;
use crate::aa::{AAFramework, LabelType};
use crate::encodings::{encode_complete, in_literal, out_literal, undec_literal, EncodingToggles};
use crate::sat::{CnfFormula, SatBackend};
use crate::utils::Labelling;
use anyhow::Result;
use log::debug;

fn encode_stable<T>(af: &AAFramework<T>, toggles: &EncodingToggles) -> CnfFormula
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut cnf = encode_complete(af, toggles);
    for id in 0..n {
        cnf.add_clause(vec![undec_literal(id, n).negate()]);
    }
    cnf
}

pub(crate) fn extensions<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Vec<Labelling<'a, T>>>
where
    T: LabelType,
{
    let mut cnf = encode_stable(af, toggles);
    let mut result = Vec::new();
    while let Some(labelling) = solve_labelling(backend, &cnf, af)? {
        cnf.add_clause(blocking_clause(&labelling, af.n_arguments()));
        result.push(labelling);
    }
    debug!("enumerated {} stable labelling(s)", result.len());
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
    let cnf = encode_stable(af, toggles);
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
    let mut cnf = encode_stable(af, toggles);
    cnf.add_clause(vec![in_literal(arg_id)]);
    Ok(solve_labelling(backend, &cnf, af)?.is_some())
}

/// Skeptical acceptance under the stable semantics.
///
/// A stable labelling leaving the argument OUT refutes acceptance. When no
/// such labelling exists, the absence of any stable labelling at all is
/// reported as [`Acceptance::NoExtension`] rather than as a vacuous
/// acceptance, so that callers can tell the two situations apart.
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
    let mut cnf = encode_stable(af, toggles);
    let checkpoint = cnf.checkpoint();
    cnf.add_clause(vec![out_literal(arg_id, n)]);
    if solve_labelling(backend, &cnf, af)?.is_some() {
        return Ok(Acceptance::Rejected);
    }
    cnf.rollback(checkpoint);
    Ok(if solve_labelling(backend, &cnf, af)?.is_some() {
        Acceptance::Accepted
    } else {
        Acceptance::NoExtension
    })
}
