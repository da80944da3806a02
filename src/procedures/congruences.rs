//! Precongruences and congruences of structures.
//!
//! Both are [compatible preorders](GenericContext::compatible_preorders), differing in the axioms added:
//! - A precongruence extends the order `<=` of the structure.
//! - A congruence is reflexive and symmetric, and is returned as the partition into its classes.

use std::collections::BTreeSet;

use crate::{
    backend::Backend,
    context::GenericContext,
    sets::{eqrel2partition, PairSet, Partition},
    structures::FiniteStructure,
    types::err::ErrorKind,
};

impl<B: Backend> GenericContext<B> {
    /// The compatible preorders of `structure` which extend `<=`.
    pub fn precongruences(
        &mut self,
        structure: &FiniteStructure,
    ) -> Result<BTreeSet<PairSet>, ErrorKind> {
        self.compatible_preorders(structure, true, false)
    }

    /// The [precongruences](GenericContext::precongruences) of each structure, in order.
    pub fn precongruences_each(
        &mut self,
        structures: &[FiniteStructure],
    ) -> Result<Vec<BTreeSet<PairSet>>, ErrorKind> {
        structures
            .iter()
            .map(|structure| self.precongruences(structure))
            .collect()
    }

    /// The congruences of `structure`, each as a partition of the elements.
    pub fn con(
        &mut self,
        structure: &FiniteStructure,
    ) -> Result<BTreeSet<Partition<usize>>, ErrorKind> {
        let relations = self.compatible_preorders(structure, false, true)?;
        Ok(relations.iter().map(|pairs| eqrel2partition(pairs)).collect())
    }

    /// The [congruences](GenericContext::con) of each structure, in order.
    pub fn con_each(
        &mut self,
        structures: &[FiniteStructure],
    ) -> Result<Vec<BTreeSet<Partition<usize>>>, ErrorKind> {
        structures
            .iter()
            .map(|structure| self.con(structure))
            .collect()
    }
}
