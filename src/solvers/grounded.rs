//! The grounded semantics driver.
//!
//! The grounded labelling is the unique complete labelling with a
//! subset-maximal UNDEC set. The driver enumerates complete labellings while
//! forcing the UNDEC set to grow strictly at each round; the last labelling
//! found before the formula becomes unsatisfiable is the grounded one.

use super::common::{force_undec_growth, solve_labelling};
use super::Acceptance;
use crate::aa::{AAFramework, LabelType};
use crate::encodings::{encode_complete, EncodingToggles};
use crate::sat::SatBackend;
use crate::utils::Labelling;
use anyhow::Result;
use log::debug;

/// Computes the grounded labelling.
///
/// `None` is only possible when a toggle-restricted encoding is
/// unsatisfiable from the start; the full encoding always has a model.
pub(crate) fn grounded_labelling<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Option<Labelling<'a, T>>>
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut cnf = encode_complete(af, toggles);
    let mut candidate = None;
    let mut n_rounds = 0;
    while let Some(labelling) = solve_labelling(backend, &cnf, af)? {
        n_rounds += 1;
        let all_undec = labelling.undecs().len() == n;
        if !all_undec {
            force_undec_growth(&mut cnf, &labelling, n);
        }
        candidate = Some(labelling);
        if all_undec {
            break;
        }
    }
    debug!("grounded labelling found after {} SAT round(s)", n_rounds);
    Ok(candidate)
}

pub(crate) fn extensions<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Vec<Labelling<'a, T>>>
where
    T: LabelType,
{
    Ok(grounded_labelling(af, toggles, backend)?
        .into_iter()
        .collect())
}

pub(crate) fn some_extension<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Option<Labelling<'a, T>>>
where
    T: LabelType,
{
    grounded_labelling(af, toggles, backend)
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
    Ok(grounded_labelling(af, toggles, backend)?
        .map(|labelling| labelling.has_in(arg_id))
        .unwrap_or(false))
}

/// Skeptical acceptance under the grounded semantics.
///
/// The grounded labelling is unique, so this coincides with credulous
/// acceptance.
pub(crate) fn skeptical_acceptance<T>(
    af: &AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
    arg_id: usize,
) -> Result<Acceptance>
where
    T: LabelType,
{
    Ok(if is_credulously_accepted(af, toggles, backend, arg_id)? {
        Acceptance::Accepted
    } else {
        Acceptance::Rejected
    })
}
