//! The preferred semantics driver.
//!
//! A preferred labelling is a complete labelling with a subset-maximal IN
//! set. The enumeration uses two nested loops: the inner one grows the IN set
//! of the current candidate until it is maximal, the outer one blocks the
//! IN set just found from being a superset of any future candidate and
//! starts over. The inner growth clauses are discarded between outer rounds
//! through a formula checkpoint.

use super::common::solve_labelling;
use super::Acceptance;
use crate::aa::{AAFramework, LabelType};
use crate::encodings::{encode_complete, in_literal, EncodingToggles};
use crate::sat::SatBackend;
use crate::utils::Labelling;
use anyhow::Result;
use log::debug;

/// Enumerates the preferred labellings, feeding each one to the visitor.
///
/// The visitor returns `false` to stop the enumeration early.
pub(crate) fn enumerate<'a, T, F>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
    visit: &mut F,
) -> Result<()>
where
    T: LabelType,
    F: FnMut(Labelling<'a, T>) -> bool,
{
    let n = af.n_arguments();
    if n == 0 {
        visit(Labelling::all_undec(af));
        return Ok(());
    }
    let mut cnf = encode_complete(af, toggles);
    // the empty extension is preferred only if nothing bigger exists
    cnf.add_clause((0..n).map(in_literal).collect());
    let mut found_any = false;
    loop {
        let checkpoint = cnf.checkpoint();
        let mut candidate = None;
        while let Some(labelling) = solve_labelling(backend, &cnf, af)? {
            let maximal = labelling.undecs().is_empty();
            if !maximal {
                for arg in labelling.ins() {
                    cnf.add_clause(vec![in_literal(arg.id())]);
                }
                let grow = (0..n)
                    .filter(|id| !labelling.has_in(*id))
                    .map(in_literal)
                    .collect();
                cnf.add_clause(grow);
            }
            candidate = Some(labelling);
            if maximal {
                break;
            }
        }
        cnf.rollback(checkpoint);
        match candidate {
            None => break,
            Some(labelling) => {
                found_any = true;
                let block = (0..n)
                    .filter(|id| !labelling.has_in(*id))
                    .map(in_literal)
                    .collect::<Vec<_>>();
                let covers_all = block.is_empty();
                if !visit(labelling) {
                    return Ok(());
                }
                if covers_all {
                    break;
                }
                cnf.add_clause(block);
            }
        }
    }
    if !found_any {
        // no model with a non-empty IN set: the grounded all-UNDEC labelling
        // is the single preferred one
        visit(Labelling::all_undec(af));
    }
    Ok(())
}

pub(crate) fn extensions<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Vec<Labelling<'a, T>>>
where
    T: LabelType,
{
    let mut result = Vec::new();
    enumerate(af, toggles, backend, &mut |labelling| {
        result.push(labelling);
        true
    })?;
    debug!("enumerated {} preferred labelling(s)", result.len());
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
    let mut result = None;
    enumerate(af, toggles, backend, &mut |labelling| {
        result = Some(labelling);
        false
    })?;
    Ok(result)
}

/// Credulous acceptance under the preferred semantics.
///
/// Every complete labelling extends to a preferred one with at least the
/// same IN set, so this coincides with credulous acceptance under the
/// complete semantics.
pub(crate) fn is_credulously_accepted<T>(
    af: &AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
    arg_id: usize,
) -> Result<bool>
where
    T: LabelType,
{
    super::complete::is_credulously_accepted(af, toggles, backend, arg_id)
}

pub(crate) fn skeptical_acceptance<T>(
    af: &AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
    arg_id: usize,
) -> Result<Acceptance>
where
    T: LabelType,
{
    let mut accepted = true;
    enumerate(af, toggles, backend, &mut |labelling| {
        accepted = labelling.has_in(arg_id);
        accepted
    })?;
    Ok(if accepted {
        Acceptance::Accepted
    } else {
        Acceptance::Rejected
    })
}
