use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use p9_algebra::config::{Config, Seconds};

fn models_arg() -> Arg {
    Arg::new("models")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("A file of mace4 interpretations, as printed by mace4 or isofilter.")
}

fn html_arg() -> Arg {
    Arg::new("html")
        .long("html")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .required(false)
        .num_args(1)
        .help("Draw to an HTML file at PATH.")
}

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("p9_cli")
        .about("Asks the LADR tools about finite algebras, and draws what comes back")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)

        .arg(Arg::new("mace4")
            .long("mace4")
            .value_name("PATH")
            .global(true)
            .num_args(1)
            .help(format!("The mace4 binary.
Default: {}", defaults.ladr.mace4)))

        .arg(Arg::new("prover9")
            .long("prover9")
            .value_name("PATH")
            .global(true)
            .num_args(1)
            .help(format!("The prover9 binary.
Default: {}", defaults.ladr.prover9)))

        .arg(Arg::new("isofilter")
            .long("isofilter")
            .value_name("PATH")
            .global(true)
            .num_args(1)
            .help(format!("The isofilter binary.
Default: {}", defaults.ladr.isofilter)))

        .arg(Arg::new("dot")
            .long("dot")
            .value_name("PATH")
            .global(true)
            .num_args(1)
            .help(format!("The graphviz dot binary.
Default: {}", defaults.diagram.dot)))

        .arg(Arg::new("no_svg")
            .long("no-svg")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Embed the DOT text of diagrams, rather than calling graphviz."))

        .subcommand(Command::new("models")
            .about("Finds models of a theory, or proves its goals")
            .arg(Arg::new("theory")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("A theory file.")
                .long_help("A theory file.

One formula per line, with '%' starting a comment.
Formulas before a line 'goals:' are assumptions, and formulas after are goals."))

            .arg(Arg::new("size")
                .long("size")
                .short('n')
                .value_parser(value_parser!(usize))
                .num_args(1)
                .conflicts_with("up_to")
                .help("Search for models of exactly this size."))

            .arg(Arg::new("up_to")
                .long("up-to")
                .value_parser(value_parser!(usize))
                .num_args(1)
                .help("Find the fine spectrum, from size 2 up to and including this size."))

            .arg(Arg::new("mace_seconds")
                .long("mace-seconds")
                .value_parser(value_parser!(Seconds))
                .num_args(1)
                .help(format!("The time budget of a search for models.
Default: {}", defaults.mace_seconds.value)))

            .arg(Arg::new("prover_seconds")
                .long("prover-seconds")
                .value_parser(value_parser!(Seconds))
                .num_args(1)
                .help(format!("The time budget of a search for a proof.
Default: {}", defaults.prover_seconds.value)))

            .arg(Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Keep isomorphic models, rather than filtering with isofilter."))

            .arg(Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print models as JSON."))

            .arg(Arg::new("symbols")
                .long("symbols")
                .num_args(1)
                .help("The symbols to draw, with a trailing 'd' to draw dually, e.g. \"<=d v\".")
                .requires("html"))

            .arg(html_arg()))

        .subcommand(Command::new("check")
            .about("Checks formulas against each structure in a file")
            .arg(models_arg())
            .arg(Arg::new("formulas")
                .required(true)
                .num_args(1..)
                .help("The formulas to check."))
            .arg(Arg::new("check_seconds")
                .long("check-seconds")
                .value_parser(value_parser!(Seconds))
                .num_args(1)
                .help(format!("The time budget of a search for a counterexample.
Default: {}", defaults.check_seconds.value)))
            .arg(Arg::new("info")
                .long("info")
                .action(ArgAction::SetTrue)
                .help("Print the counterexample found to a formula.")))

        .subcommand(Command::new("congruences")
            .about("Finds the congruences of each structure in a file")
            .arg(models_arg())
            .arg(Arg::new("preorder_seconds")
                .long("preorder-seconds")
                .value_parser(value_parser!(Seconds))
                .num_args(1)
                .help(format!("The time budget of a search for congruences.
Default: {}", defaults.preorder_seconds.value)))
            .arg(html_arg()))

        .subcommand(Command::new("precongruences")
            .about("Finds the compatible preorders extending <= of each structure in a file")
            .arg(models_arg())
            .arg(Arg::new("preorder_seconds")
                .long("preorder-seconds")
                .value_parser(value_parser!(Seconds))
                .num_args(1)
                .help(format!("The time budget of a search for precongruences.
Default: {}", defaults.preorder_seconds.value)))
            .arg(html_arg()))

        .subcommand(Command::new("draw")
            .about("Draws Hasse diagrams of each structure in a file")
            .arg(models_arg())
            .arg(Arg::new("symbols")
                .long("symbols")
                .num_args(1)
                .help("The symbols to draw, with a trailing 'd' to draw dually, e.g. \"<=d v\".
Default: each of '<=d ^d v + *d' defined by the first structure."))
            .arg(Arg::new("highlight")
                .long("highlight")
                .value_name("RELATION")
                .num_args(1)
                .help("A unary relation, whose elements are highlighted."))
            .arg(html_arg()))
}
