/*!
The boundary to an external prover and model finder.

A [Backend] answers a [Query] with an [Outcome]:
- With no goals, a search for models of the assumptions, answered with [Outcome::Models].
- With goals, a search for counterexamples to the goals, answered with [Outcome::Models] if some are found, and otherwise a search for a proof, answered with [Outcome::Proof].

The backend used outside of tests is [Ladr], which calls the mace4, isofilter, and prover9 binaries.
Any other implementation (e.g. a table of canned answers) may be passed to a [context](crate::context) instead.

A search which runs out of time is not an error.
Instead, whatever was found in time is returned, and so an empty list of models may mean either that there are no models, or that none were found in time.
*/

pub mod input;
pub mod interpretation;
mod ladr;
pub use ladr::Ladr;

use crate::{
    config::{Config, Seconds},
    structures::FiniteStructure,
    types::err::ErrorKind,
};

/// A client of some prover and model finder.
pub trait Backend {
    fn run_query(&mut self, query: &Query) -> Result<Outcome, ErrorKind>;
}

/// The domain sizes of a search for models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cardinality {
    /// Any size, as chosen by the backend.
    #[default]
    Any,

    /// Exactly the given size.
    Exactly(usize),

    /// Each size from 2 up to and including the given size.
    UpTo(usize),
}

/// Everything needed to ask a backend a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub assumptions: Vec<String>,

    pub goals: Vec<String>,

    /// Time budget of a search for models.
    pub mace_seconds: Seconds,

    /// Time budget of a search for a proof.
    pub prover_seconds: Seconds,

    pub cardinality: Cardinality,

    /// Directives written verbatim at the head of the input, e.g. `set(arithmetic).`
    pub options: Vec<String>,

    /// Extra command line parameters, separated by whitespace.
    pub params: String,

    /// Log the complete output of the backend.
    pub info: bool,

    /// The most models to find, or all models if none.
    pub max_models: Option<usize>,

    /// Keep only one model from each isomorphism class.
    pub noniso: bool,
}

impl Query {
    /// A query with the budgets of the config, and no other restrictions.
    pub fn from_config(assumptions: Vec<String>, goals: Vec<String>, config: &Config) -> Self {
        Query {
            assumptions,
            goals,
            mace_seconds: config.mace_seconds.value,
            prover_seconds: config.prover_seconds.value,
            cardinality: Cardinality::Any,
            options: Vec::default(),
            params: String::default(),
            info: false,
            max_models: None,
            noniso: true,
        }
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_budgets(mut self, mace_seconds: Seconds, prover_seconds: Seconds) -> Self {
        self.mace_seconds = mace_seconds;
        self.prover_seconds = prover_seconds;
        self
    }
}

/// The result of a search for a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofOutcome {
    /// A proof was found, with the text of the proof.
    Proved(String),

    /// The search space was exhausted without a proof.
    Failed,

    /// The search ended for some other reason, e.g. a time limit.
    Unknown,
}

/// The answer to a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Models of the assumptions, or counterexamples to the goals.
    Models(Vec<FiniteStructure>),

    Proof(ProofOutcome),
}

impl Outcome {
    /// The models of the outcome, with a proof outcome having no models.
    pub fn into_models(self) -> Vec<FiniteStructure> {
        match self {
            Self::Models(models) => models,
            Self::Proof(_) => Vec::default(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Models(models) => write!(f, "{} models", models.len()),
            Self::Proof(ProofOutcome::Proved(_)) => write!(f, "Proved"),
            Self::Proof(ProofOutcome::Failed) => write!(f, "Search failed"),
            Self::Proof(ProofOutcome::Unknown) => write!(f, "Unknown"),
        }
    }
}
