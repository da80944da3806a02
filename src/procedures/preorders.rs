//! Compatible preorders of a structure, found as models of a theory of a relation `C`.
//!
//! The theory of compatible preorders of a structure `A` is:
//! - The diagram of `A`.
//! - Transitivity of `C`.
//! - Either `C` extends the order `<=` of `A` (a precongruence), or reflexivity of `C`.
//! - Optionally, symmetry of `C`.
//! - A compatibility axiom for each operation of `A`, see [OperationKind].

use std::collections::BTreeSet;

use crate::{
    backend::{Backend, Cardinality, Query},
    context::GenericContext,
    misc::log::targets,
    sets::{rel2pairs, PairSet},
    structures::{FiniteStructure, Operation, Relation},
    types::err::{self, ErrorKind},
};

/// The symbol of the relation found.
pub const COMPATIBLE: &str = "C";

/// Operations for which compatibility with `C` is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// `-`, order reversing.
    Negation,
    /// `~`, order reversing.
    Complement,
    /// `'`, order reversing.
    Prime,
    /// `f`, order preserving.
    Function,
    Times,
    Plus,
    /// `\`, order reversing in the first argument.
    LeftResidual,
    /// `/`, order reversing in the second argument.
    RightResidual,
    Meet,
    Join,
}

impl OperationKind {
    pub fn from_symbol(symbol: &str) -> Option<OperationKind> {
        let kind = match symbol {
            "-" => Self::Negation,
            "~" => Self::Complement,
            "'" => Self::Prime,
            "f" => Self::Function,
            "*" => Self::Times,
            "+" => Self::Plus,
            "\\" => Self::LeftResidual,
            "/" => Self::RightResidual,
            "^" => Self::Meet,
            "v" => Self::Join,
            _ => return None,
        };
        Some(kind)
    }

    /// The axiom stating `C` is compatible with the operation.
    pub fn compatibility_axiom(&self) -> &'static str {
        match self {
            Self::Negation => "C(x,y)->C(-y,-x)",
            Self::Complement => "C(x,y)->C(~y,~x)",
            Self::Prime => "C(x,y)->C(y',x')",
            Self::Function => "C(x,y)->C(f(x),f(y))",
            Self::Times => "C(x,y)->C(x*z,y*z)&C(z*x,z*y)",
            Self::Plus => "C(x,y)->C(x+z,y+z)&C(z+x,z+y)",
            Self::LeftResidual => "C(x,y)->C(y\\z,x\\z)&C(z\\x,z\\y)",
            Self::RightResidual => "C(x,y)->C(x/z,y/z)&C(z/y,z/x)",
            Self::Meet => "C(x,y)->C(x^z,y^z)&C(z^x,z^y)",
            Self::Join => "C(x,y)->C(x v z,y v z)&C(z v x,z v y)",
        }
    }
}

/// The theory whose models over the diagram of `structure` are its compatible preorders.
///
/// Constants need no compatibility axiom, and any other operation without a known [OperationKind] is an error.
pub fn compatibility_theory(
    structure: &FiniteStructure,
    precon: bool,
    sym: bool,
) -> Result<Vec<String>, ErrorKind> {
    let mut theory = structure.diagram("");

    theory.push("C(x,y)&C(y,z)->C(x,z)".to_owned());
    match precon {
        true => theory.push("x<=y->C(x,y)".to_owned()),
        false => theory.push("C(x,x)".to_owned()),
    }
    if sym {
        theory.push("C(x,y)->C(y,x)".to_owned());
    }

    for (symbol, operation) in structure.operations() {
        match (OperationKind::from_symbol(symbol), operation) {
            (Some(kind), _) => theory.push(kind.compatibility_axiom().to_owned()),
            (None, Operation::Constant(_)) => {}
            (None, _) => {
                log::error!(target: targets::COMPATIBILITY, "No compatibility axiom for {symbol}");
                return Err(err::CompatibilityError::UnsupportedOperation(symbol.clone()).into());
            }
        }
    }

    Ok(theory)
}

impl<B: Backend> GenericContext<B> {
    /// The compatible preorders of `structure`, each as the set of pairs it relates.
    ///
    /// - With `precon` the preorders extend `<=`, otherwise they are reflexive.
    /// - With `sym` the preorders are symmetric, and so congruences.
    ///
    /// Every model at the cardinality of `structure` is requested, without filtering isomorphic models, as distinct preorders may be isomorphic.
    pub fn compatible_preorders(
        &mut self,
        structure: &FiniteStructure,
        precon: bool,
        sym: bool,
    ) -> Result<BTreeSet<PairSet>, ErrorKind> {
        let theory = compatibility_theory(structure, precon, sym)?;

        let mut query = Query::from_config(theory, Vec::default(), &self.config)
            .with_budgets(self.config.preorder_seconds.value, 0)
            .with_cardinality(Cardinality::Exactly(structure.cardinality()));
        query.noniso = false;

        let models = self.backend.run_query(&query)?.into_models();

        let mut preorders = BTreeSet::default();
        for model in &models {
            match model.relation(COMPATIBLE) {
                Some(Relation::Binary(table)) => {
                    preorders.insert(rel2pairs(table));
                }
                _ => {
                    log::warn!(target: targets::COMPATIBILITY, "A model has no binary relation {COMPATIBLE}");
                }
            }
        }

        log::debug!(target: targets::COMPATIBILITY, "{} compatible relations from {} models", preorders.len(), models.len());
        Ok(preorders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boolean_algebra() -> FiniteStructure {
        FiniteStructure::new(2)
            .unwrap()
            .with_operation("^", Operation::Binary(vec![vec![0, 0], vec![0, 1]]))
            .unwrap()
            .with_operation("v", Operation::Binary(vec![vec![0, 1], vec![1, 1]]))
            .unwrap()
            .with_operation("'", Operation::Unary(vec![1, 0]))
            .unwrap()
            .with_operation("0", Operation::Constant(0))
            .unwrap()
    }

    #[test]
    fn theory_of_congruences() {
        let theory = compatibility_theory(&boolean_algebra(), false, true).unwrap();

        assert!(theory.contains(&"C(x,y)&C(y,z)->C(x,z)".to_owned()));
        assert!(theory.contains(&"C(x,x)".to_owned()));
        assert!(theory.contains(&"C(x,y)->C(y,x)".to_owned()));
        assert!(!theory.contains(&"x<=y->C(x,y)".to_owned()));
        assert!(theory.contains(&"C(x,y)->C(y',x')".to_owned()));
        assert!(theory.contains(&"C(x,y)->C(x^z,y^z)&C(z^x,z^y)".to_owned()));
        assert!(theory.contains(&"C(x,y)->C(x v z,y v z)&C(z v x,z v y)".to_owned()));
        assert!(theory.contains(&"0 v 1=1".to_owned()));
    }

    #[test]
    fn theory_of_precongruences() {
        let theory = compatibility_theory(&boolean_algebra(), true, false).unwrap();
        assert!(theory.contains(&"x<=y->C(x,y)".to_owned()));
        assert!(!theory.contains(&"C(x,x)".to_owned()));
        assert!(!theory.contains(&"C(x,y)->C(y,x)".to_owned()));
    }

    #[test]
    fn unsupported_operation() {
        let structure = FiniteStructure::new(2)
            .unwrap()
            .with_operation("g", Operation::Unary(vec![1, 1]))
            .unwrap();
        assert_eq!(
            compatibility_theory(&structure, true, false),
            Err(ErrorKind::Compatibility(
                err::CompatibilityError::UnsupportedOperation("g".to_owned())
            ))
        );
    }
}
