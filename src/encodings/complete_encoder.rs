use super::EncodingToggles;
use crate::aa::{AAFramework, LabelType};
use crate::sat::{CnfFormula, Literal};

/// Returns the literal stating the argument with the given id is labelled IN.
pub fn in_literal(id: usize) -> Literal {
    Literal::from(1 + id as isize)
}

/// Returns the literal stating the argument with the given id is labelled OUT.
///
/// The `n_args` parameter gives the number of arguments in the framework.
pub fn out_literal(id: usize, n_args: usize) -> Literal {
    Literal::from((1 + n_args + id) as isize)
}

/// Returns the literal stating the argument with the given id is labelled UNDEC.
///
/// The `n_args` parameter gives the number of arguments in the framework.
pub fn undec_literal(id: usize, n_args: usize) -> Literal {
    Literal::from((1 + 2 * n_args + id) as isize)
}

/// Encodes the complete labellings of a framework as a CNF formula.
///
/// The formula is built on `3n` variables, where `n` is the number of
/// arguments: the three consecutive blocks hold the IN, OUT and UNDEC
/// indicators, in the id order of the arguments.
///
/// An unattacked argument is forced IN by unit clauses. For the attacked
/// ones, an exactly-one-of-three constraint is emitted, followed by the
/// implication directions enabled in the given toggle set. Self-attacks need
/// no special handling; they simply put the same argument on both sides of
/// the emitted implications.
///
/// The encoder is deterministic: encoding the same framework with the same
/// toggles twice yields the same clause sequence.
pub fn encode_complete<T>(af: &AAFramework<T>, toggles: &EncodingToggles) -> CnfFormula
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut cnf = CnfFormula::new_with_n_vars(3 * n);
    for arg in af.argument_set().iter() {
        let id = arg.id();
        let attackers = af.attackers_of(id);
        if attackers.is_empty() {
            cnf.add_clause(vec![in_literal(id)]);
            cnf.add_clause(vec![out_literal(id, n).negate()]);
            cnf.add_clause(vec![undec_literal(id, n).negate()]);
            continue;
        }
        cnf.add_clause(vec![
            in_literal(id),
            out_literal(id, n),
            undec_literal(id, n),
        ]);
        cnf.add_clause(vec![in_literal(id).negate(), out_literal(id, n).negate()]);
        cnf.add_clause(vec![in_literal(id).negate(), undec_literal(id, n).negate()]);
        cnf.add_clause(vec![out_literal(id, n).negate(), undec_literal(id, n).negate()]);
        let mut all_attackers_out = Vec::new();
        let mut some_attacker_in = Vec::new();
        let mut some_attacker_undec = Vec::new();
        let mut attackers_in = Vec::new();
        for &attacker in attackers {
            if toggles.in_to_attacker_out {
                cnf.add_clause(vec![in_literal(id).negate(), out_literal(attacker, n)]);
            }
            if toggles.attackers_out_to_in {
                all_attackers_out.push(out_literal(attacker, n).negate());
            }
            if toggles.attacker_in_to_out {
                cnf.add_clause(vec![in_literal(attacker).negate(), out_literal(id, n)]);
            }
            if toggles.out_to_attacker_in {
                some_attacker_in.push(in_literal(attacker));
            }
            if toggles.undec_to_attacker_not_in {
                cnf.add_clause(vec![
                    undec_literal(id, n).negate(),
                    in_literal(attacker).negate(),
                ]);
                some_attacker_undec.push(undec_literal(attacker, n));
            }
            if toggles.attacker_undec_to_undec {
                attackers_in.push(in_literal(attacker));
            }
        }
        if toggles.attackers_out_to_in {
            all_attackers_out.push(in_literal(id));
            cnf.add_clause(all_attackers_out);
        }
        if toggles.out_to_attacker_in {
            some_attacker_in.push(out_literal(id, n).negate());
            cnf.add_clause(some_attacker_in);
        }
        if toggles.undec_to_attacker_not_in {
            some_attacker_undec.push(undec_literal(id, n).negate());
            cnf.add_clause(some_attacker_undec);
        }
        if toggles.attacker_undec_to_undec {
            for &attacker in attackers {
                let mut cl = attackers_in.clone();
                cl.push(undec_literal(attacker, n).negate());
                cl.push(undec_literal(id, n));
                cnf.add_clause(cl);
            }
        }
    }
    cnf
}
