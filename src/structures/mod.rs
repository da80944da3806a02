/*!
Finite structures, as found by mace4.

A [FiniteStructure] is a cardinality `n`, with domain `0..n`, together with named tables:
- [Operation]s, of arity zero (constants), one, or two.
- [Relation]s, of arity one or two.

Structures are most often [parsed](crate::backend::interpretation) from the output of mace4, though may be built by hand:

```rust
# use p9_algebra::structures::{FiniteStructure, Relation};
let chain = FiniteStructure::new(3)
    .and_then(|s| {
        s.with_relation(
            "<=",
            Relation::Binary(vec![
                vec![true, true, true],
                vec![false, true, true],
                vec![false, false, true],
            ]),
        )
    })
    .unwrap();
assert_eq!(chain.relations().len(), 1);
```
*/

mod finite;
pub use finite::{Element, FiniteStructure, Operation, Relation};

pub mod symbol;
