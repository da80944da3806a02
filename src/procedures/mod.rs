/*!
Procedures of a context, each implemented as methods of [GenericContext](crate::context::GenericContext).

- [p9]: a query, for one cardinality or a [fine spectrum](p9::FineSpectrum) across many.
- [check]: whether formulas hold in a structure.
- [preorders]: compatible preorders of a structure.
- [congruences]: precongruences and congruences, built on compatible preorders.

Each procedure builds a [Query](crate::backend::Query) from the config of the context, with the budget for the procedure, and hands it to the backend of the context.
*/

pub mod check;
pub mod congruences;
pub mod p9;
pub mod preorders;
