/*!
The context --- within which queries are asked, and through which a backend is reached.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [backend](crate::backend::Backend) it asks.
A [Context] asks the LADR binaries, and is made from a config alone.

Every query procedure is a method of the context, see [procedures](crate::procedures).

# Example
```rust,no_run
# use p9_algebra::backend::Query;
# use p9_algebra::config::Config;
# use p9_algebra::context::Context;
let mut the_context = Context::from_config(Config::default());

let lattice = vec!["x^y = y^x", "(x^y)^z = x^(y^z)", "x^(x v y) = x",
                   "x v y = y v x", "(x v y) v z = x v (y v z)", "x v (x^y) = x"];
let query = Query::from_config(lattice.iter().map(|f| f.to_string()).collect(), vec![], &the_context.config);

let spectrum = the_context.fine_spectrum(&query, 5).unwrap();
assert_eq!(spectrum.counts(), vec![1, 1, 1, 2, 5]);
```
*/

pub mod callbacks;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
