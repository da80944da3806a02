#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::ArgMatches;

use p9_algebra::{
    backend::{Cardinality, Outcome, ProofOutcome, Query},
    context::Context,
    diagram::{default_symbols, ShowInput},
    order::PosetInput,
    procedures::{check::CheckResult, p9::P9Result},
    structures::FiniteStructure,
    types::err::{self, ErrorKind},
};

mod misc;
mod parse;
mod sketch;

use misc::{load_models, load_theory};
use sketch::{drawing_requested, sketchbook_from_args};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let result = match matches.subcommand() {
        Some(("models", args)) => models(args),
        Some(("check", args)) => check(args),
        Some(("congruences", args)) => congruences(args),
        Some(("precongruences", args)) => precongruences(args),
        Some(("draw", args)) => draw(args),
        _ => {
            println!("% No subcommand given, see --help");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        println!("% Error: {e}");
        std::process::exit(1);
    }
}

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a PathBuf, ErrorKind> {
    match args.try_get_one::<PathBuf>(id) {
        Ok(Some(path)) => Ok(path),
        _ => Err(err::ParseError::NoFile.into()),
    }
}

fn print_models(models: &[FiniteStructure], json: bool) {
    if json {
        match serde_json::to_string_pretty(models) {
            Ok(text) => println!("{text}"),
            Err(e) => println!("% Could not write models as JSON: {e}"),
        }
        return;
    }

    println!("% {} models", models.len());
    for (index, model) in models.iter().enumerate() {
        println!("{}", model.as_interpretation(index + 1));
    }
}

fn models(args: &ArgMatches) -> Result<(), ErrorKind> {
    let config = parse::config::config_from_args(args);
    let mut the_context = Context::from_config(config);

    let (assumptions, goals) = load_theory(path_arg(args, "theory")?)?;

    let cardinality = match (
        args.get_one::<usize>("size"),
        args.get_one::<usize>("up_to"),
    ) {
        (Some(size), _) => Cardinality::Exactly(*size),
        (None, Some(bound)) => Cardinality::UpTo(*bound),
        (None, None) => Cardinality::Any,
    };

    let mut query = Query::from_config(assumptions, goals, &the_context.config)
        .with_cardinality(cardinality);
    query.noniso = !args.get_flag("all");

    let json = args.get_flag("json");
    let drawn = match the_context.p9(&query)? {
        P9Result::Outcome(Outcome::Models(models)) => {
            print_models(&models, json);
            models
        }

        P9Result::Outcome(Outcome::Proof(ProofOutcome::Proved(proof))) => {
            println!("{proof}");
            println!("% THEOREM PROVED");
            Vec::default()
        }

        P9Result::Outcome(Outcome::Proof(outcome)) => {
            println!("% {}", Outcome::Proof(outcome));
            Vec::default()
        }

        P9Result::Spectrum(spectrum) => {
            println!("% {spectrum}");
            let models = spectrum.models.into_iter().flatten().collect::<Vec<_>>();
            print_models(&models, json);
            models
        }
    };

    if drawing_requested(args) && !drawn.is_empty() {
        let symbols = match args.get_one::<String>("symbols") {
            Some(symbols) => vec![symbols.clone()],
            None => Vec::default(),
        };
        let mut book = sketchbook_from_args(args, the_context.config.diagram.clone());
        book.show::<usize>(&ShowInput::Structures(drawn), &symbols)?;
    }

    Ok(())
}

fn check(args: &ArgMatches) -> Result<(), ErrorKind> {
    let config = parse::config::config_from_args(args);
    let mut the_context = Context::from_config(config);

    let models = load_models(path_arg(args, "models")?)?;
    let formulas = match args.get_many::<String>("formulas") {
        Some(formulas) => formulas.map(|formula| formula.as_str()).collect::<Vec<_>>(),
        None => Vec::default(),
    };
    let info = args.get_flag("info");

    for (index, model) in models.iter().enumerate() {
        let result = the_context.check(model, &formulas, info)?;
        println!("% Structure {index}: {result}");

        if let CheckResult::Counterexample { models, .. } = &result {
            print_models(models, false);
        }
    }

    Ok(())
}

fn congruences(args: &ArgMatches) -> Result<(), ErrorKind> {
    let config = parse::config::config_from_args(args);
    let mut the_context = Context::from_config(config);

    let models = load_models(path_arg(args, "models")?)?;
    let lattices = the_context.con_each(&models)?;

    for (index, lattice) in lattices.iter().enumerate() {
        println!("% Structure {index}: {} congruences", lattice.len());
        for partition in lattice {
            println!("{partition:?}");
        }
    }

    if drawing_requested(args) {
        let families = lattices
            .into_iter()
            .map(|lattice| PosetInput::PartitionFamily(lattice.into_iter().collect()))
            .collect();
        let mut book = sketchbook_from_args(args, the_context.config.diagram.clone());
        book.show(&ShowInput::Families(families), &[])?;
    }

    Ok(())
}

fn precongruences(args: &ArgMatches) -> Result<(), ErrorKind> {
    let config = parse::config::config_from_args(args);
    let mut the_context = Context::from_config(config);

    let models = load_models(path_arg(args, "models")?)?;
    let families = the_context.precongruences_each(&models)?;

    for (index, family) in families.iter().enumerate() {
        println!("% Structure {index}: {} precongruences", family.len());
        for pairs in family {
            println!("{pairs:?}");
        }
    }

    if drawing_requested(args) {
        let families = families
            .into_iter()
            .map(|family| PosetInput::SubsetFamily(family.into_iter().collect()))
            .collect();
        let mut book = sketchbook_from_args(args, the_context.config.diagram.clone());
        book.show(&ShowInput::Families(families), &[])?;
    }

    Ok(())
}

fn draw(args: &ArgMatches) -> Result<(), ErrorKind> {
    let config = parse::config::config_from_args(args);

    let models = load_models(path_arg(args, "models")?)?;
    let symbols = match (args.get_one::<String>("symbols"), models.first()) {
        (Some(symbols), _) => symbols.clone(),
        (None, Some(first)) => default_symbols(first).join(" "),
        (None, None) => String::default(),
    };
    let highlight = args.get_one::<String>("highlight").map(|name| name.as_str());

    let mut book = sketchbook_from_args(args, config.diagram);
    book.m4diag(&models, &symbols, highlight)?;

    Ok(())
}
