use crate::aa::{AAFramework, LabelType};
use crate::encodings::{in_literal, out_literal, undec_literal};
use crate::sat::{CnfFormula, Literal, SatBackend, SatResponse};
use crate::utils::Labelling;
use anyhow::{anyhow, Result};

/// Solves the given formula and maps a model back onto a labelling.
///
/// `Ok(None)` means the formula was proved unsatisfiable. A solver timeout is
/// an error: reporting it as the absence of a labelling would turn an
/// unfinished search into a wrong answer.
pub(crate) fn solve_labelling<'a, T>(
    backend: &dyn SatBackend,
    cnf: &CnfFormula,
    af: &'a AAFramework<T>,
) -> Result<Option<Labelling<'a, T>>>
where
    T: LabelType,
{
    match backend.solve(cnf)? {
        SatResponse::Model(model) => Ok(Some(Labelling::from_model(af, &model))),
        SatResponse::Unsatisfiable => Ok(None),
        SatResponse::Timeout => Err(anyhow!("the SAT solver timed out")),
    }
}

/// Builds the clause forbidding the solver from returning this exact labelling again.
pub(crate) fn blocking_clause<T>(labelling: &Labelling<T>, n_args: usize) -> Vec<Literal>
where
    T: LabelType,
{
    let mut clause = Vec::with_capacity(n_args);
    for arg in labelling.ins() {
        clause.push(in_literal(arg.id()).negate());
    }
    for arg in labelling.outs() {
        clause.push(out_literal(arg.id(), n_args).negate());
    }
    for arg in labelling.undecs() {
        clause.push(undec_literal(arg.id(), n_args).negate());
    }
    clause
}

/// Strengthens the formula so that the next model has a strictly larger UNDEC set.
///
/// Every argument the labelling leaves UNDEC is pinned UNDEC by a unit clause,
/// and at least one currently IN or OUT argument must flip to UNDEC. Callers
/// must not invoke this on an all-UNDEC labelling (the flip clause would be
/// empty).
pub(crate) fn force_undec_growth<T>(cnf: &mut CnfFormula, labelling: &Labelling<T>, n_args: usize)
where
    T: LabelType,
{
    for arg in labelling.undecs() {
        cnf.add_clause(vec![undec_literal(arg.id(), n_args)]);
    }
    let mut flip = Vec::with_capacity(n_args);
    for arg in labelling.ins().iter().chain(labelling.outs()) {
        flip.push(undec_literal(arg.id(), n_args));
    }
    cnf.add_clause(flip);
}
