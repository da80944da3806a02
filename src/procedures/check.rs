//! Checking whether formulas hold in a structure.

use crate::{
    backend::{Backend, Cardinality, Query},
    context::GenericContext,
    misc::log::targets,
    structures::FiniteStructure,
    types::err::ErrorKind,
};

/// Operations which determine an order, and which are tied to `<=` when a checked formula mentions both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeOperator {
    Plus,
    Times,
    Join,
    Meet,
}

impl BridgeOperator {
    /// In order of precedence.
    pub const ALL: [BridgeOperator; 4] = [Self::Plus, Self::Times, Self::Join, Self::Meet];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Times => "*",
            Self::Join => "v",
            Self::Meet => "^",
        }
    }

    /// The definition of `<=` in terms of the operator.
    pub fn axiom(&self) -> &'static str {
        match self {
            Self::Plus => "x<=y <-> x+y=y",
            Self::Times => "x<=y <-> x*y=x",
            Self::Join => "x<=y <-> x v y=y",
            Self::Meet => "x<=y <-> x^y=x",
        }
    }

    /// The operator to tie to `<=` for `formula`, if `formula` mentions `<=`.
    ///
    /// Mentions are by substring, and the first operator mentioned is used.
    pub fn for_formula(formula: &str) -> Option<BridgeOperator> {
        if !formula.contains("<=") {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|operator| formula.contains(operator.symbol()))
    }
}

/// The result of a [check](GenericContext::check).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckResult {
    /// No counterexample was found to any formula.
    Holds,

    /// Some formula has a counterexample.
    Fails,

    /// The counterexample found to `formula`.
    Counterexample {
        models: Vec<FiniteStructure>,
        formula: String,
    },
}

impl CheckResult {
    pub fn holds(&self) -> bool {
        matches!(self, Self::Holds)
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Holds => write!(f, "True"),
            Self::Fails => write!(f, "False"),
            Self::Counterexample { formula, .. } => write!(f, "{formula} fails"),
        }
    }
}

impl<B: Backend> GenericContext<B> {
    /// Checks each of `formulas` against the diagram of `structure`.
    ///
    /// A counterexample to a formula is a model of the diagram of `structure`, of the same cardinality, in which the formula fails.
    /// Formulas are checked in order, and the check stops at the first formula with a counterexample.
    /// With `info` the counterexample is returned, otherwise only the failure is.
    pub fn check(
        &mut self,
        structure: &FiniteStructure,
        formulas: &[&str],
        info: bool,
    ) -> Result<CheckResult, ErrorKind> {
        let diagram = structure.diagram("");

        for formula in formulas {
            let mut assumptions = diagram.clone();
            if let Some(operator) = BridgeOperator::for_formula(formula) {
                assumptions.push(operator.axiom().to_owned());
            }

            let mut query = Query::from_config(assumptions, vec![formula.to_string()], &self.config)
                .with_budgets(self.config.check_seconds.value, 0)
                .with_cardinality(Cardinality::Exactly(structure.cardinality()));
            query.max_models = Some(1);
            query.noniso = false;

            let counterexamples = self.backend.run_query(&query)?.into_models();
            if !counterexamples.is_empty() {
                log::info!(target: targets::CHECK, "{formula} fails");
                return match info {
                    true => Ok(CheckResult::Counterexample {
                        models: counterexamples,
                        formula: formula.to_string(),
                    }),
                    false => Ok(CheckResult::Fails),
                };
            }
            log::debug!(target: targets::CHECK, "{formula} holds");
        }

        Ok(CheckResult::Holds)
    }
}
