use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use p9_algebra::{
    backend::{Cardinality, Outcome, ProofOutcome, Query},
    procedures::{check::CheckResult, p9::P9Result},
    structures::{FiniteStructure, Operation},
    types::err::{self, ErrorKind},
};

mod common;
use common::*;

mod check {
    use super::*;

    #[test]
    fn holds_without_counterexamples() {
        let mut the_context = silent_context();
        let result = the_context
            .check(&two_chain(), &["x^y=y^x", "x<=y -> x v y=y"], false)
            .unwrap();
        assert_eq!(result, CheckResult::Holds);
        assert_eq!(format!("{result}"), "True");

        let queries = &the_context.backend.queries;
        assert_eq!(queries.len(), 2);

        let first = &queries[0];
        assert_eq!(first.goals, vec!["x^y=y^x".to_owned()]);
        assert_eq!(first.cardinality, Cardinality::Exactly(2));
        assert_eq!(first.max_models, Some(1));
        assert_eq!(first.mace_seconds, 1000);
        assert_eq!(first.prover_seconds, 0);
        assert!(first.assumptions.contains(&"0!=1".to_owned()));
        assert!(!first.assumptions.iter().any(|a| a.contains("<->")));

        // The join is tied to the order for the second formula.
        assert!(queries[1]
            .assumptions
            .contains(&"x<=y <-> x v y=y".to_owned()));
    }

    #[test]
    fn counterexample_stops_the_check() {
        let counterexample = two_chain();
        let found = counterexample.clone();
        let mut the_context = context_with(move |query: &Query| {
            match query.goals[0].as_str() {
                "x^y=x" => Ok(Outcome::Models(vec![found.clone()])),
                _ => Ok(Outcome::Models(Vec::default())),
            }
        });

        let result = the_context
            .check(&two_chain(), &["x^x=x", "x^y=x", "x v x=x"], true)
            .unwrap();

        assert_eq!(
            result,
            CheckResult::Counterexample {
                models: vec![counterexample],
                formula: "x^y=x".to_owned()
            }
        );
        assert_eq!(format!("{result}"), "x^y=x fails");
        assert!(!result.holds());
        assert_eq!(the_context.backend.queries.len(), 2);
    }

    #[test]
    fn fails_without_info() {
        let mut the_context =
            context_with(|_: &Query| Ok(Outcome::Models(vec![two_chain()])));
        let result = the_context.check(&two_chain(), &["x=y"], false).unwrap();
        assert_eq!(result, CheckResult::Fails);
        assert_eq!(format!("{result}"), "False");
    }

    #[test]
    fn proof_outcomes_are_not_counterexamples() {
        let mut the_context = context_with(|_: &Query| {
            Ok(Outcome::Proof(ProofOutcome::Proved("proof".to_owned())))
        });
        assert!(the_context
            .check(&two_chain(), &["x=x"], true)
            .unwrap()
            .holds());
    }
}

mod preorders {
    use super::*;

    fn identity() -> Vec<Vec<bool>> {
        vec![vec![true, false], vec![false, true]]
    }

    fn full() -> Vec<Vec<bool>> {
        vec![vec![true, true], vec![true, true]]
    }

    fn order() -> Vec<Vec<bool>> {
        vec![vec![true, true], vec![false, true]]
    }

    #[test]
    fn congruences_of_a_chain() {
        let base = two_chain();
        let models = vec![
            with_c(&base, identity()),
            with_c(&base, full()),
            with_c(&base, identity()),
        ];
        let mut the_context = context_with(move |_: &Query| Ok(Outcome::Models(models.clone())));

        let lattice = the_context.con(&two_chain()).unwrap();
        let expected = BTreeSet::from([
            BTreeSet::from([BTreeSet::from([0]), BTreeSet::from([1])]),
            BTreeSet::from([BTreeSet::from([0, 1])]),
        ]);
        assert_eq!(lattice, expected);

        let query = &the_context.backend.queries[0];
        assert!(query.goals.is_empty());
        assert!(!query.noniso);
        assert_eq!(query.max_models, None);
        assert_eq!(query.mace_seconds, 100_000);
        assert_eq!(query.cardinality, Cardinality::Exactly(2));
        assert!(query.assumptions.contains(&"C(x,x)".to_owned()));
        assert!(query.assumptions.contains(&"C(x,y)->C(y,x)".to_owned()));
        assert!(query
            .assumptions
            .contains(&"C(x,y)->C(x^z,y^z)&C(z^x,z^y)".to_owned()));
    }

    #[test]
    fn precongruences_of_a_chain() {
        let base = two_chain();
        let models = vec![with_c(&base, order()), with_c(&base, full())];
        let mut the_context = context_with(move |_: &Query| Ok(Outcome::Models(models.clone())));

        let preorders = the_context.precongruences(&two_chain()).unwrap();
        assert_eq!(preorders.len(), 2);
        assert!(preorders.contains(&BTreeSet::from([(0, 0), (0, 1), (1, 1)])));

        let query = &the_context.backend.queries[0];
        assert!(query.assumptions.contains(&"x<=y->C(x,y)".to_owned()));
        assert!(!query.assumptions.contains(&"C(x,y)->C(y,x)".to_owned()));
    }

    #[test]
    fn each_structure_separately() {
        let base = two_chain();
        let models = vec![with_c(&base, full())];
        let mut the_context = context_with(move |_: &Query| Ok(Outcome::Models(models.clone())));

        let lattices = the_context.con_each(&[two_chain(), two_chain()]).unwrap();
        assert_eq!(lattices.len(), 2);
        assert_eq!(the_context.backend.queries.len(), 2);

        let families = the_context.precongruences_each(&[]).unwrap();
        assert!(families.is_empty());
    }

    #[test]
    fn unsupported_operation_asks_nothing() {
        let structure = FiniteStructure::new(2)
            .unwrap()
            .with_operation("g", Operation::Binary(vec![vec![0, 0], vec![0, 0]]))
            .unwrap();
        let mut the_context = silent_context();

        assert_eq!(
            the_context.con(&structure),
            Err(ErrorKind::Compatibility(
                err::CompatibilityError::UnsupportedOperation("g".to_owned())
            ))
        );
        assert!(the_context.backend.queries.is_empty());
    }
}

mod spectrum {
    use super::*;

    /// Answers with as many copies of `base` as there are lattices of the asked cardinality.
    fn lattice_counts(query: &Query) -> Result<Outcome, ErrorKind> {
        let count = match query.cardinality {
            Cardinality::Exactly(2) | Cardinality::Exactly(3) => 1,
            Cardinality::Exactly(4) => 2,
            Cardinality::Exactly(5) => 5,
            _ => 0,
        };
        Ok(Outcome::Models(vec![two_chain(); count]))
    }

    #[test]
    fn counts_with_callback() {
        let mut the_context = context_with(lattice_counts);

        let seen = Rc::new(RefCell::new(Vec::default()));
        let seen_by_callback = seen.clone();
        the_context.set_callback_spectrum(Box::new(move |counts: &[usize]| {
            seen_by_callback.borrow_mut().extend_from_slice(counts)
        }));

        let query = Query::from_config(vec!["x=x".to_owned()], vec![], &the_context.config);
        let spectrum = the_context.fine_spectrum(&query, 5).unwrap();

        assert_eq!(spectrum.counts(), vec![1, 1, 1, 2, 5]);
        assert_eq!(*seen.borrow(), vec![1, 1, 1, 2, 5]);
        assert_eq!(spectrum.at(4).len(), 2);
        assert!(spectrum.at(9).is_empty());
        assert_eq!(format!("{spectrum}"), "Fine spectrum: [1, 1, 1, 2, 5]");

        let asked = the_context
            .backend
            .queries
            .iter()
            .map(|query| query.cardinality)
            .collect::<Vec<_>>();
        assert_eq!(
            asked,
            (2..=5).map(Cardinality::Exactly).collect::<Vec<_>>()
        );
    }

    #[test]
    fn small_bound() {
        let mut the_context = context_with(lattice_counts);
        let query = Query::from_config(vec![], vec![], &the_context.config);
        let spectrum = the_context.fine_spectrum(&query, 1).unwrap();
        assert_eq!(spectrum.counts(), vec![1]);
        assert!(the_context.backend.queries.is_empty());
    }

    #[test]
    fn p9_dispatch() {
        let mut the_context = context_with(lattice_counts);

        let query = Query::from_config(vec![], vec![], &the_context.config)
            .with_cardinality(Cardinality::Exactly(4));
        match the_context.p9(&query).unwrap() {
            P9Result::Outcome(Outcome::Models(models)) => assert_eq!(models.len(), 2),
            other => panic!("{other:?}"),
        }

        let query = query.with_cardinality(Cardinality::UpTo(3));
        match the_context.p9(&query).unwrap() {
            P9Result::Spectrum(spectrum) => assert_eq!(spectrum.counts(), vec![1, 1, 1]),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn backend_errors_propagate() {
        let mut the_context = context_with(|_: &Query| {
            Err(err::BackendError::NotFound("mace4".to_owned()).into())
        });
        let query = Query::from_config(vec![], vec![], &the_context.config);
        assert_eq!(
            the_context.fine_spectrum(&query, 3),
            Err(ErrorKind::Backend(err::BackendError::NotFound(
                "mace4".to_owned()
            )))
        );
    }
}
