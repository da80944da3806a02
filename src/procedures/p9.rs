//! Asking the backend, for a single cardinality or across a range of cardinalities.

use crate::{
    backend::{Backend, Cardinality, Outcome, Query},
    context::GenericContext,
    misc::log::targets,
    structures::FiniteStructure,
    types::err::ErrorKind,
};

/// The models of a theory at each cardinality up to some bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FineSpectrum {
    /// Models, indexed by cardinality.
    ///
    /// The lists at index 0 and 1 are placeholders, and always empty.
    pub models: Vec<Vec<FiniteStructure>>,
}

impl FineSpectrum {
    /// The count of models at each cardinality, from cardinality 1.
    ///
    /// Cardinality 1 is counted as one model.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![1];
        counts.extend(self.models.iter().skip(2).map(|models| models.len()));
        counts
    }

    /// The models at `cardinality`.
    pub fn at(&self, cardinality: usize) -> &[FiniteStructure] {
        self.models
            .get(cardinality)
            .map(|models| models.as_slice())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for FineSpectrum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fine spectrum: {:?}", self.counts())
    }
}

/// The result of [p9](GenericContext::p9).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum P9Result {
    Outcome(Outcome),
    Spectrum(FineSpectrum),
}

impl<B: Backend> GenericContext<B> {
    /// Asks the backend `query`.
    ///
    /// - With [Cardinality::Any] or [Cardinality::Exactly] the query is passed to the backend as is.
    /// - With [Cardinality::UpTo] a [fine spectrum](GenericContext::fine_spectrum) is found.
    pub fn p9(&mut self, query: &Query) -> Result<P9Result, ErrorKind> {
        match query.cardinality {
            Cardinality::Any | Cardinality::Exactly(_) => {
                Ok(P9Result::Outcome(self.backend.run_query(query)?))
            }
            Cardinality::UpTo(bound) => Ok(P9Result::Spectrum(self.fine_spectrum(query, bound)?)),
        }
    }

    /// The models of `query` at each cardinality from 2 up to and including `bound`.
    ///
    /// Each cardinality is a separate call to the backend, made in order.
    /// The counts of the spectrum are logged, and passed to the spectrum callback, if set.
    pub fn fine_spectrum(&mut self, query: &Query, bound: usize) -> Result<FineSpectrum, ErrorKind> {
        let mut models = vec![Vec::default(), Vec::default()];

        for cardinality in 2..=bound {
            let sized = query
                .clone()
                .with_cardinality(Cardinality::Exactly(cardinality));
            let found = self.backend.run_query(&sized)?.into_models();
            log::debug!(target: targets::SPECTRUM, "{} models of cardinality {cardinality}", found.len());
            models.push(found);
        }

        let spectrum = FineSpectrum { models };
        let counts = spectrum.counts();
        log::info!(target: targets::SPECTRUM, "{spectrum}");
        self.make_callback_spectrum(&counts);

        Ok(spectrum)
    }
}
