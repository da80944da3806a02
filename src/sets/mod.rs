/*!
Elementary operations on finite sets and binary relations.

Sets are [BTreeSet]s, so results are deterministic and may themselves be collected into sets (e.g. a [powerset], or a [Partition]).
*/

use std::collections::{BTreeMap, BTreeSet};

/// A set of `(i, j)` index pairs, the true entries of a binary relation table.
pub type PairSet = BTreeSet<(usize, usize)>;

/// Pairwise disjoint, jointly exhaustive blocks.
pub type Partition<T> = BTreeSet<BTreeSet<T>>;

/// The intersection of a family of sets.
///
/// The intersection of an empty family is returned as the empty set.
/// Strictly, the intersection of an empty family is the universe, which is not known here.
pub fn intersection<'a, T, I>(family: I) -> BTreeSet<T>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a BTreeSet<T>>,
{
    let mut family = family.into_iter();
    let mut meet = match family.next() {
        Some(first) => first.clone(),
        None => return BTreeSet::default(),
    };
    for set in family {
        meet.retain(|element| set.contains(element));
    }
    meet
}

/// The union of a family of sets, empty for an empty family.
pub fn union<'a, T, I>(family: I) -> BTreeSet<T>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a BTreeSet<T>>,
{
    let mut join = BTreeSet::default();
    for set in family {
        join.extend(set.iter().cloned());
    }
    join
}

/// All subsets of `set`, including the empty set and `set` itself.
pub fn powerset<T: Ord + Clone>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>> {
    let mut subsets = vec![BTreeSet::default()];
    for element in set {
        let with_element = subsets
            .iter()
            .map(|subset| {
                let mut extended = subset.clone();
                extended.insert(element.clone());
                extended
            })
            .collect::<Vec<_>>();
        subsets.extend(with_element);
    }
    subsets.into_iter().collect()
}

/// The pairs `(i, j)` for which `relation[i][j]` holds.
pub fn rel2pairs(relation: &[Vec<bool>]) -> PairSet {
    let mut pairs = PairSet::default();
    for (i, row) in relation.iter().enumerate() {
        for (j, holds) in row.iter().enumerate() {
            if *holds {
                pairs.insert((i, j));
            }
        }
    }
    pairs
}

/// The equivalence classes of the equivalence relation given by `pairs`.
///
/// Classes are merged for each pair, so the order of the pairs does not matter.
/// Reflexivity, symmetry and transitivity are assumed, not checked.
/// Elements which occur in no pair do not occur in the partition.
pub fn eqrel2partition<'a, T, I>(pairs: I) -> Partition<T>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a (T, T)>,
{
    // Each element is mapped to an index, and classes are tracked by a union-find over the indicies.
    let mut index = BTreeMap::<T, usize>::default();
    let mut parent = Vec::<usize>::default();

    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for (a, b) in pairs {
        let mut index_of = |element: &T| -> usize {
            if let Some(i) = index.get(element) {
                return *i;
            }
            let fresh = parent.len();
            parent.push(fresh);
            index.insert(element.clone(), fresh);
            fresh
        };
        let a = index_of(a);
        let b = index_of(b);

        let (root_a, root_b) = (root(&mut parent, a), root(&mut parent, b));
        if root_a != root_b {
            parent[root_b.max(root_a)] = root_a.min(root_b);
        }
    }

    let mut classes = BTreeMap::<usize, BTreeSet<T>>::default();
    for (element, i) in index {
        let representative = root(&mut parent, i);
        classes.entry(representative).or_default().insert(element);
    }
    classes.into_values().collect()
}
