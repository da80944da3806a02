//! Writing LADR input files.
//!
//! Both mace4 and prover9 read the same input language, and differ only in the parameters assigned.

use std::fmt::Write;

use super::{Cardinality, Query};

/// Which LADR program an input is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Program {
    Mace4,
    Prover9,
}

/// A formula terminated by a period, as LADR requires.
fn terminated(formula: &str) -> String {
    let formula = formula.trim();
    match formula.ends_with('.') {
        true => formula.to_owned(),
        false => format!("{formula}."),
    }
}

fn write_list(input: &mut String, name: &str, formulas: &[String]) {
    let _ = writeln!(input, "formulas({name}).");
    for formula in formulas {
        let _ = writeln!(input, "{}", terminated(formula));
    }
    let _ = writeln!(input, "end_of_list.");
}

/// The input to `program` for `query`.
///
/// For mace4:
/// - A fixed cardinality sets both the start and end domain size.
/// - [UpTo](Cardinality::UpTo) searches from domain size 2.
/// - With no limit on models, all models are requested for a bounded domain size, and otherwise the first.
pub fn ladr_input(query: &Query, program: Program) -> String {
    let mut input = String::default();

    for option in &query.options {
        let _ = writeln!(input, "{}", terminated(option));
    }

    match program {
        Program::Mace4 => {
            let _ = writeln!(input, "assign(max_seconds, {}).", query.mace_seconds);

            let bounded = match query.cardinality {
                Cardinality::Any => false,
                Cardinality::Exactly(size) => {
                    let _ = writeln!(input, "assign(domain_size, {size}).");
                    let _ = writeln!(input, "assign(end_size, {size}).");
                    true
                }
                Cardinality::UpTo(size) => {
                    let _ = writeln!(input, "assign(domain_size, 2).");
                    let _ = writeln!(input, "assign(end_size, {size}).");
                    true
                }
            };

            let max_models = match (query.max_models, bounded) {
                (Some(count), _) => count as i64,
                (None, true) => -1,
                (None, false) => 1,
            };
            let _ = writeln!(input, "assign(max_models, {max_models}).");
        }

        Program::Prover9 => {
            let _ = writeln!(input, "assign(max_seconds, {}).", query.prover_seconds);
        }
    }

    write_list(&mut input, "assumptions", &query.assumptions);
    write_list(&mut input, "goals", &query.goals);

    input
}
