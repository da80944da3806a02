//! Tests of the LADR backend against small shell scripts standing in for the binaries.
//!
//! Each script is written once, before any test starts a process.

#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::PathBuf,
    sync::{mpsc, OnceLock},
    thread,
    time::Duration,
};

use p9_algebra::{
    backend::{Backend, Ladr, Outcome, ProofOutcome, Query},
    config::Config,
    context::GenericContext,
    order::chain2model,
    structures::FiniteStructure,
    types::err::{self, ErrorKind},
};

const MISSING: &str = "/nonexistent/p9_algebra/missing";

fn chain(n: usize) -> FiniteStructure {
    chain2model(&(0..n).collect::<Vec<_>>()).unwrap()
}

/// The two models printed by the `mace4_two` script, isomorphic to each other.
fn two_models() -> Vec<FiniteStructure> {
    vec![chain(2), chain2model(&[1, 0]).unwrap()]
}

fn fakes_dir() -> PathBuf {
    std::env::temp_dir().join(format!("p9_algebra_fakes_{}", std::process::id()))
}

fn write_script(name: &str, body: &str) {
    let path = fakes_dir().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn setup() -> &'static PathBuf {
    static FAKES: OnceLock<PathBuf> = OnceLock::new();
    FAKES.get_or_init(|| {
        let dir = fakes_dir();
        fs::create_dir_all(&dir).unwrap();

        let models = two_models();
        let both = format!("{}\n{}", models[0].as_interpretation(1), models[1].as_interpretation(2));

        write_script(
            "mace4_two",
            &format!("cat > /dev/null\ncat <<'END'\n{both}\nEND\nexit 0\n"),
        );
        write_script(
            "isofilter_first",
            &format!("cat > /dev/null\ncat <<'END'\n{}\nEND\n", models[0].as_interpretation(1)),
        );
        write_script("mace4_none", "cat > /dev/null\necho 'Exiting with failure.'\nexit 2\n");
        write_script(
            "mace4_fatal",
            "cat > /dev/null\necho '%%ERROR: sread_term'\necho 'Fatal error:  sread_term error'\nexit 1\n",
        );
        write_script(
            "mace4_args",
            &format!(
                "printf '%s\\n' \"$@\" > '{dir}/args'\ncat > '{dir}/stdin'\nexit 2\n",
                dir = dir.display()
            ),
        );
        write_script(
            "prover9_proof",
            "cat > /dev/null\n\
             echo '============================== PROOF ================================='\n\
             echo '1 x = x.  [assumption].'\n\
             echo '============================== end of proof =========================='\n\
             echo 'THEOREM PROVED'\n\
             exit 0\n",
        );

        dir
    })
}

/// A backend calling the named scripts, where a name which is not a script is taken as is.
fn ladr(mace4: &str, prover9: &str, isofilter: &str) -> Ladr {
    let dir = setup();
    let locate = |name: &str| match dir.join(name).exists() {
        true => dir.join(name).display().to_string(),
        false => name.to_owned(),
    };

    let mut config = Config::default().ladr;
    config.mace4 = locate(mace4);
    config.prover9 = locate(prover9);
    config.isofilter = locate(isofilter);
    Ladr::new(config)
}

fn query(goals: &[&str]) -> Query {
    let goals = goals.iter().map(|goal| goal.to_string()).collect();
    let mut query = Query::from_config(vec!["x<=x".to_owned()], goals, &Config::default());
    query.noniso = false;
    query
}

mod models {
    use super::*;

    #[test]
    fn without_goals_only_mace4() {
        let mut backend = ladr("mace4_two", MISSING, MISSING);
        assert_eq!(backend.run_query(&query(&[])), Ok(Outcome::Models(two_models())));
    }

    #[test]
    fn exhausted_search() {
        let mut backend = ladr("mace4_none", MISSING, MISSING);
        assert_eq!(backend.run_query(&query(&[])), Ok(Outcome::Models(vec![])));
    }

    #[test]
    fn noniso_through_isofilter() {
        let mut backend = ladr("mace4_two", MISSING, "isofilter_first");

        let mut noniso = query(&[]);
        noniso.noniso = true;
        assert_eq!(backend.run_query(&noniso), Ok(Outcome::Models(vec![chain(2)])));

        let mut backend = ladr("mace4_two", MISSING, MISSING);
        assert_eq!(backend.run_query(&query(&[])), Ok(Outcome::Models(two_models())));
    }

    #[test]
    fn params_on_the_command_line() {
        let dir = setup();
        let mut backend = ladr("mace4_args", MISSING, MISSING);

        let mut with_params = query(&[]);
        with_params.params = " -c   -n 3 ".to_owned();
        assert_eq!(backend.run_query(&with_params), Ok(Outcome::Models(vec![])));

        assert_eq!(fs::read_to_string(dir.join("args")).unwrap(), "-c\n-n\n3\n");
        let input = fs::read_to_string(dir.join("stdin")).unwrap();
        assert!(input.contains("formulas(assumptions)."));
        assert!(input.contains("x<=x."));
    }

    #[test]
    fn isofilter_with_a_long_input() {
        let backend = ladr("mace4_none", MISSING, "cat");
        let models = vec![chain(12); 1500];

        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let _ = sender.send(backend.isofilter(&models).map(|kept| kept.len()));
        });

        match receiver.recv_timeout(Duration::from_secs(20)) {
            Ok(kept) => assert_eq!(kept, Ok(1500)),
            Err(e) => panic!("isofilter did not return: {e}"),
        }
    }
}

mod goals {
    use super::*;

    #[test]
    fn counterexamples_before_proofs() {
        let mut backend = ladr("mace4_two", MISSING, MISSING);
        assert_eq!(
            backend.run_query(&query(&["x=y"])),
            Ok(Outcome::Models(two_models()))
        );
    }

    #[test]
    fn proof_without_counterexamples() {
        let mut backend = ladr("mace4_none", "prover9_proof", MISSING);
        match backend.run_query(&query(&["x=x"])) {
            Ok(Outcome::Proof(ProofOutcome::Proved(proof))) => {
                assert!(proof.starts_with("============================== PROOF"));
                assert!(proof.contains("[assumption]"));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn no_prover_budget() {
        let mut backend = ladr("mace4_none", MISSING, MISSING);
        let query = query(&["x=x"]).with_budgets(2, 0);
        assert_eq!(backend.run_query(&query), Ok(Outcome::Models(vec![])));
    }

    #[test]
    fn no_mace_budget() {
        let mut backend = ladr(MISSING, "prover9_proof", MISSING);
        let query = query(&["x=x"]).with_budgets(0, 60);
        assert!(matches!(
            backend.run_query(&query),
            Ok(Outcome::Proof(ProofOutcome::Proved(_)))
        ));
    }
}

mod fatal {
    use super::*;

    #[test]
    fn malformed_input() {
        let mut backend = ladr("mace4_fatal", MISSING, MISSING);
        match backend.run_query(&query(&[])) {
            Err(ErrorKind::Backend(err::BackendError::Output(message))) => {
                assert!(message.contains("Fatal error"));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn check_is_not_a_pass() {
        let mut the_context = GenericContext::new(
            Config::default(),
            ladr("mace4_fatal", MISSING, MISSING),
        );
        let result = the_context.check(&chain(2), &["x ^^^ ((( y"], false);
        assert!(matches!(
            result,
            Err(ErrorKind::Backend(err::BackendError::Output(_)))
        ));
    }
}
