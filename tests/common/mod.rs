#![allow(dead_code)]

use p9_algebra::{
    backend::{Backend, Outcome, Query},
    config::Config,
    context::GenericContext,
    structures::{FiniteStructure, Operation, Relation},
    types::err::ErrorKind,
};

pub type Answer = Box<dyn FnMut(&Query) -> Result<Outcome, ErrorKind>>;

/// A backend which answers each query with a closure, and keeps every query asked.
pub struct Oracle {
    pub answer: Answer,
    pub queries: Vec<Query>,
}

impl Backend for Oracle {
    fn run_query(&mut self, query: &Query) -> Result<Outcome, ErrorKind> {
        self.queries.push(query.clone());
        (self.answer)(query)
    }
}

pub fn context_with(
    answer: impl FnMut(&Query) -> Result<Outcome, ErrorKind> + 'static,
) -> GenericContext<Oracle> {
    let backend = Oracle {
        answer: Box::new(answer),
        queries: Vec::default(),
    };
    GenericContext::new(Config::default(), backend)
}

/// A context whose backend never finds a model.
pub fn silent_context() -> GenericContext<Oracle> {
    context_with(|_: &Query| Ok(Outcome::Models(Vec::default())))
}

/// The two element lattice, with its order.
pub fn two_chain() -> FiniteStructure {
    FiniteStructure::new(2)
        .unwrap()
        .with_operation("^", Operation::Binary(vec![vec![0, 0], vec![0, 1]]))
        .unwrap()
        .with_operation("v", Operation::Binary(vec![vec![0, 1], vec![1, 1]]))
        .unwrap()
        .with_relation("<=", Relation::Binary(vec![vec![true, true], vec![false, true]]))
        .unwrap()
}

/// `base` together with the relation `C`.
pub fn with_c(base: &FiniteStructure, table: Vec<Vec<bool>>) -> FiniteStructure {
    base.clone()
        .with_relation("C", Relation::Binary(table))
        .unwrap()
}
