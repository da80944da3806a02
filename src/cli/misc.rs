use std::{fs::File, io::Read, path::Path};

use p9_algebra::{
    backend::interpretation::parse_interpretations,
    misc::log::targets,
    structures::FiniteStructure,
    types::err::{self, ErrorKind},
};
#[cfg(feature = "xz")]
use xz2::read::XzDecoder;

const GOALS_MARKER: &str = "goals:";

/// The text of the file at `path`, decompressed if the file has an `xz` extension.
pub fn read_text(path: &Path) -> Result<String, ErrorKind> {
    let mut file = File::open(path).map_err(|e| {
        log::error!(target: targets::PARSE, "Could not open {path:?}: {e}");
        err::ParseError::NoFile
    })?;

    let mut text = String::default();
    let read = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => XzDecoder::new(file).read_to_string(&mut text),
        _ => file.read_to_string(&mut text),
    };

    match read {
        Ok(_) => Ok(text),
        Err(e) => {
            log::error!(target: targets::PARSE, "Could not read {path:?}: {e}");
            Err(err::ParseError::NoFile.into())
        }
    }
}

/// A theory, as assumptions and goals.
///
/// One formula per line, with `%` starting a comment.
/// Formulas following a line `goals:` are goals, and a second such line is an error.
pub fn parse_theory(text: &str) -> Result<(Vec<String>, Vec<String>), ErrorKind> {
    let mut assumptions = Vec::default();
    let mut goals = Vec::default();
    let mut in_goals = false;

    for (index, line) in text.lines().enumerate() {
        let formula = match line.split_once('%') {
            Some((formula, _comment)) => formula.trim(),
            None => line.trim(),
        };

        if formula.is_empty() {
            continue;
        }

        if formula == GOALS_MARKER {
            if in_goals {
                return Err(err::ParseError::Theory(index + 1).into());
            }
            in_goals = true;
            continue;
        }

        match in_goals {
            true => goals.push(formula.to_owned()),
            false => assumptions.push(formula.to_owned()),
        }
    }

    log::debug!(target: targets::PARSE, "{} assumptions and {} goals", assumptions.len(), goals.len());
    Ok((assumptions, goals))
}

pub fn load_theory(path: &Path) -> Result<(Vec<String>, Vec<String>), ErrorKind> {
    parse_theory(&read_text(path)?)
}

pub fn load_models(path: &Path) -> Result<Vec<FiniteStructure>, ErrorKind> {
    let models = parse_interpretations(&read_text(path)?)?;
    log::info!(target: targets::PARSE, "Read {} models from {path:?}", models.len());
    Ok(models)
}
