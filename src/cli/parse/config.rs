use clap::ArgMatches;

use p9_algebra::config::{Config, ConfigOption, Seconds};

fn set_seconds(option: &mut ConfigOption<Seconds>, args: &ArgMatches, id: &str) {
    if let Ok(Some(seconds)) = args.try_get_one::<Seconds>(id) {
        if !option.set(*seconds) {
            let (min, max) = option.min_max();
            println!("% {} must be between {min} and {max}, keeping {}", option.name, option.value);
        }
    };
}

/// The config of a context, from the arguments of a subcommand.
///
/// Global arguments are read from the same matches, as clap propagates them to subcommands.
pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(path)) = args.try_get_one::<String>("mace4") {
        the_config.ladr.mace4 = path.clone()
    };

    if let Ok(Some(path)) = args.try_get_one::<String>("prover9") {
        the_config.ladr.prover9 = path.clone()
    };

    if let Ok(Some(path)) = args.try_get_one::<String>("isofilter") {
        the_config.ladr.isofilter = path.clone()
    };

    if let Ok(Some(path)) = args.try_get_one::<String>("dot") {
        the_config.diagram.dot = path.clone()
    };

    set_seconds(&mut the_config.mace_seconds, args, "mace_seconds");
    set_seconds(&mut the_config.prover_seconds, args, "prover_seconds");
    set_seconds(&mut the_config.check_seconds, args, "check_seconds");
    set_seconds(&mut the_config.preorder_seconds, args, "preorder_seconds");

    the_config
}
