use crate::{
    config::LadrConfig,
    misc::{
        log::targets,
        pipe::{pipe_through, PipeError},
    },
    structures::FiniteStructure,
    types::err::{self, ErrorKind},
};

use super::{
    input::{ladr_input, Program},
    interpretation::parse_interpretations,
    Backend, Outcome, ProofOutcome, Query,
};

const PROOF_START: &str = "============================== PROOF";
const PROOF_END: &str = "============================== end of proof";

/// The exit status of a LADR program on a fatal error, e.g. a malformed formula.
const FATAL_EXIT: i32 = 1;
const FATAL_MARKER: &str = "Fatal error";

/// A backend which calls the LADR binaries, mace4 for models and prover9 for proofs.
///
/// Each call blocks until the binary exits, which happens at the latest when the time budget of the query is spent.
pub struct Ladr {
    pub config: LadrConfig,
}

impl Ladr {
    pub fn new(config: LadrConfig) -> Self {
        Ladr { config }
    }

    /// Runs `binary` with `input` on stdin, and returns stdout.
    ///
    /// Exit statuses other than [FATAL_EXIT] are not errors, as LADR programs use them to report e.g. an exhausted search or a time limit.
    /// A fatal error is returned as [BackendError::Output](err::BackendError::Output), with the message of the program if one was found.
    fn run(&self, binary: &str, input: &str, params: &str) -> Result<String, ErrorKind> {
        log::debug!(target: targets::BACKEND, "Running {binary} {params}");
        log::trace!(target: targets::BACKEND, "Input:\n{input}");

        let args = params.split_whitespace().collect::<Vec<_>>();
        let output = pipe_through(binary, &args, input).map_err(|e| match e {
            PipeError::Spawn(e) => {
                log::error!(target: targets::BACKEND, "Failed to run {binary}: {e}");
                err::BackendError::NotFound(binary.to_owned())
            }
            PipeError::Io(e) => err::BackendError::Io(e.to_string()),
        })?;

        log::debug!(target: targets::BACKEND, "{binary} exited with {}", output.status);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);

        match fatal_error(binary, output.status.code(), &stdout, &stderr) {
            Some(message) => {
                log::error!(target: targets::BACKEND, "{message}");
                Err(err::BackendError::Output(message).into())
            }
            None => Ok(stdout),
        }
    }

    /// Models of the assumptions of `query`, or counterexamples to its goals.
    pub fn mace4(&self, query: &Query) -> Result<Vec<FiniteStructure>, ErrorKind> {
        let output = self.run(
            &self.config.mace4,
            &ladr_input(query, Program::Mace4),
            &query.params,
        )?;
        if query.info {
            log::debug!(target: targets::BACKEND, "mace4 output:\n{output}");
        }

        let models = parse_interpretations(&output)?;
        log::debug!(target: targets::BACKEND, "mace4 found {} models", models.len());

        match query.noniso && models.len() > 1 {
            true => self.isofilter(&models),
            false => Ok(models),
        }
    }

    /// One model from each isomorphism class of `models`.
    pub fn isofilter(&self, models: &[FiniteStructure]) -> Result<Vec<FiniteStructure>, ErrorKind> {
        let input = models
            .iter()
            .enumerate()
            .map(|(number, model)| model.as_interpretation(number + 1))
            .collect::<Vec<_>>()
            .join("\n");

        let output = self.run(&self.config.isofilter, &input, "")?;
        let kept = parse_interpretations(&output)?;
        log::debug!(target: targets::BACKEND, "isofilter kept {} of {} models", kept.len(), models.len());
        Ok(kept)
    }

    /// A search for a proof of the goals of `query` from its assumptions.
    pub fn prover9(&self, query: &Query) -> Result<ProofOutcome, ErrorKind> {
        let output = self.run(
            &self.config.prover9,
            &ladr_input(query, Program::Prover9),
            &query.params,
        )?;
        if query.info {
            log::debug!(target: targets::BACKEND, "prover9 output:\n{output}");
        }
        Ok(proof_outcome(&output))
    }
}

/// The message of a fatal error of `binary`, from its exit status and output.
fn fatal_error(binary: &str, code: Option<i32>, stdout: &str, stderr: &str) -> Option<String> {
    let reported = stdout
        .lines()
        .chain(stderr.lines())
        .find(|line| line.contains(FATAL_MARKER))
        .map(|line| format!("{binary}: {}", line.trim()));

    match (reported, code) {
        (Some(message), _) => Some(message),
        (None, Some(FATAL_EXIT)) => Some(format!("{binary} exited with status {FATAL_EXIT}")),
        (None, _) => None,
    }
}

/// The outcome of a search for a proof, from the output of prover9.
pub fn proof_outcome(output: &str) -> ProofOutcome {
    if output.contains("THEOREM PROVED") {
        let proof = match (output.find(PROOF_START), output.find(PROOF_END)) {
            (Some(start), Some(end)) if start < end => &output[start..end + PROOF_END.len()],
            _ => output,
        };
        ProofOutcome::Proved(proof.to_owned())
    } else if output.contains("SEARCH FAILED") {
        ProofOutcome::Failed
    } else {
        ProofOutcome::Unknown
    }
}

impl Backend for Ladr {
    fn run_query(&mut self, query: &Query) -> Result<Outcome, ErrorKind> {
        if query.goals.is_empty() {
            return Ok(Outcome::Models(self.mace4(query)?));
        }

        if query.mace_seconds > 0 {
            let counterexamples = self.mace4(query)?;
            if !counterexamples.is_empty() {
                return Ok(Outcome::Models(counterexamples));
            }
        }

        match query.prover_seconds > 0 {
            true => Ok(Outcome::Proof(self.prover9(query)?)),
            false => Ok(Outcome::Models(Vec::default())),
        }
    }
}
