/*!
A library for asking the [LADR](https://www.cs.unm.edu/~mccune/prover9/) tools about finite algebras, and for drawing what comes back.

- [Finite structures](structures) are a cardinality with tables for operations and relations.
- Queries go through a [context](context), which owns a [backend](backend) and a [config](config).
- [Procedures](procedures) on a context find models, check formulas, and find compatible preorders and congruences.
- [Orders](order) of families of sets or partitions become structures, and structures become [Hasse diagrams](diagram).

# Example

```rust,no_run
# use p9_algebra::backend::{Cardinality, Query};
# use p9_algebra::config::Config;
# use p9_algebra::context::Context;
let mut the_context = Context::from_config(Config::default());

let semilattice = vec!["x^x = x".to_owned(), "x^y = y^x".to_owned(), "(x^y)^z = x^(y^z)".to_owned()];
let query = Query::from_config(semilattice, vec![], &the_context.config)
    .with_cardinality(Cardinality::Exactly(3));

let structure = the_context.p9(&query).unwrap();
println!("{structure:?}");
```
*/

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod backend;
pub mod config;
pub mod context;
pub mod diagram;
pub mod misc;
pub mod order;
pub mod procedures;
pub mod sets;
pub mod structures;
pub mod types;
