//! The semi-stable semantics driver.
//!
//! Semi-stable labellings are the preferred labellings whose UNDEC set is
//! subset-minimal among preferred labellings. The driver materializes the
//! preferred set and post-filters it; there is no dedicated SAT formulation.

use super::Acceptance;
use crate::aa::{AAFramework, LabelType};
use crate::encodings::EncodingToggles;
use crate::sat::SatBackend;
use crate::utils::Labelling;
use anyhow::Result;
use log::debug;

fn undec_ids<T>(labelling: &Labelling<T>) -> Vec<usize>
where
    T: LabelType,
{
    labelling.undecs().iter().map(|a| a.id()).collect()
}

// both arguments are sorted in increasing id order
fn is_strict_subset(small: &[usize], big: &[usize]) -> bool {
    small.len() < big.len() && small.iter().all(|id| big.binary_search(id).is_ok())
}

pub(crate) fn extensions<'a, T>(
    af: &'a AAFramework<T>,
    toggles: &EncodingToggles,
    backend: &dyn SatBackend,
) -> Result<Vec<Labelling<'a, T>>>
where
    T: LabelType,
{
    let preferred = super::preferred::extensions(af, toggles, backend)?;
    let undec_sets = preferred.iter().map(undec_ids).collect::<Vec<_>>();
    let result = preferred
        .into_iter()
        .enumerate()
        .filter(|(i, _)| {
            !undec_sets
                .iter()
                .any(|other| is_strict_subset(other, &undec_sets[*i]))
        })
        .map(|(_, labelling)| labelling)
        .collect::<Vec<_>>();
    debug!("kept {} semi-stable labelling(s)", result.len());
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
    Ok(extensions(af, toggles, backend)?.into_iter().next())
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
    Ok(extensions(af, toggles, backend)?
        .iter()
        .any(|labelling| labelling.has_in(arg_id)))
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
    Ok(
        if extensions(af, toggles, backend)?
            .iter()
            .all(|labelling| labelling.has_in(arg_id))
        {
            Acceptance::Accepted
        } else {
            Acceptance::Rejected
        },
    )
}
