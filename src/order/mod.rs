/*!
Finite structures from ordered families.

A family is given as a [PosetInput], which fixes how the elements are compared:
- A [chain](PosetInput::Chain), compared by [Ord]. For chains of [PartialOrd] elements, such as floats, see [chain2model].
- A [family of subsets](PosetInput::SubsetFamily), compared by containment.
- A [family of partitions](PosetInput::PartitionFamily), compared by refinement.

The result of [poset2model] has one binary relation `<=`, which may be passed on to a [diagram](crate::diagram).
*/

use std::collections::BTreeSet;

use crate::{
    sets::Partition,
    structures::{FiniteStructure, Relation},
    types::err::{self, ErrorKind},
};

/// A family of elements, tagged with how its elements are ordered.
#[derive(Clone, Debug, PartialEq)]
pub enum PosetInput<T> {
    Chain(Vec<T>),
    SubsetFamily(Vec<BTreeSet<T>>),
    PartitionFamily(Vec<Partition<T>>),
}

impl<T> PosetInput<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::Chain(elements) => elements.len(),
            Self::SubsetFamily(sets) => sets.len(),
            Self::PartitionFamily(partitions) => partitions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether every block of `finer` is contained in some block of `coarser`.
pub fn refines<T: Ord>(finer: &Partition<T>, coarser: &Partition<T>) -> bool {
    finer
        .iter()
        .all(|block| coarser.iter().any(|other| block.is_subset(other)))
}

/// A finite structure with `<=` the order of `family`.
///
/// Element `i` of the structure is element `i` of the family, and `<=[i][j]` holds when element `i` is below element `j`.
pub fn poset2model<T: Ord>(family: &PosetInput<T>) -> Result<FiniteStructure, ErrorKind> {
    if family.is_empty() {
        return Err(err::OrderError::Empty.into());
    }

    let table = match family {
        PosetInput::Chain(elements) => return chain2model(elements),
        PosetInput::SubsetFamily(sets) => order_table(sets, |a, b| a.is_subset(b)),
        PosetInput::PartitionFamily(partitions) => order_table(partitions, refines),
    };

    FiniteStructure::new(family.len())?.with_relation("<=", Relation::Binary(table))
}

/// A finite structure with `<=` the order of `elements` under [PartialOrd].
///
/// The order is made reflexive, so an element incomparable with itself (e.g. `f64::NAN`) is still below itself.
pub fn chain2model<T: PartialOrd>(elements: &[T]) -> Result<FiniteStructure, ErrorKind> {
    if elements.is_empty() {
        return Err(err::OrderError::Empty.into());
    }

    let table = elements
        .iter()
        .enumerate()
        .map(|(i, a)| {
            elements
                .iter()
                .enumerate()
                .map(|(j, b)| i == j || a <= b)
                .collect()
        })
        .collect();

    FiniteStructure::new(elements.len())?.with_relation("<=", Relation::Binary(table))
}

fn order_table<E>(elements: &[E], below: impl Fn(&E, &E) -> bool) -> Vec<Vec<bool>> {
    elements
        .iter()
        .map(|a| elements.iter().map(|b| below(a, b)).collect())
        .collect()
}
