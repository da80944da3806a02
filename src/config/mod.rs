/*!
Configuration of a context.

All configuration for a context is contained within [Config].
Time budgets are given in seconds, as the LADR tools take them.
Paths to external binaries default to names looked up on `PATH`.
*/

mod config_option;
pub use config_option::ConfigOption;

/// Seconds, as given to `assign(max_seconds, _)`.
pub type Seconds = u64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The default time budget for a search for models.
    pub mace_seconds: ConfigOption<Seconds>,

    /// The default time budget for a search for a proof.
    pub prover_seconds: ConfigOption<Seconds>,

    /// The time budget for a search for counterexamples during a check.
    pub check_seconds: ConfigOption<Seconds>,

    /// The time budget for a search for compatible preorders.
    pub preorder_seconds: ConfigOption<Seconds>,

    /// Configuration of the LADR binaries.
    pub ladr: LadrConfig,

    /// Configuration of diagrams.
    pub diagram: DiagramConfig,
}

/// Paths to the LADR binaries.
#[derive(Clone, Debug)]
pub struct LadrConfig {
    pub mace4: String,
    pub prover9: String,
    pub isofilter: String,
}

/// How diagrams are drawn.
#[derive(Clone, Debug)]
pub struct DiagramConfig {
    /// Path to the graphviz `dot` binary.
    pub dot: String,

    /// Width (and height) of a node, in inches.
    pub node_width: ConfigOption<f64>,

    pub font_size: ConfigOption<u32>,

    /// The colour of nodes in a highlighted unary relation.
    pub highlight_colour: String,

    pub base_colour: String,
}

impl Default for Config {
    /// The default context follows the budgets of an interactive session: quick model searches, patient proofs.
    fn default() -> Self {
        Config {
            mace_seconds: ConfigOption {
                name: "mace_seconds",
                min: 0,
                max: Seconds::MAX,
                value: 2,
            },

            prover_seconds: ConfigOption {
                name: "prover_seconds",
                min: 0,
                max: Seconds::MAX,
                value: 60,
            },

            check_seconds: ConfigOption {
                name: "check_seconds",
                min: 0,
                max: Seconds::MAX,
                value: 1000,
            },

            preorder_seconds: ConfigOption {
                name: "preorder_seconds",
                min: 0,
                max: Seconds::MAX,
                value: 100_000,
            },

            ladr: LadrConfig::default(),
            diagram: DiagramConfig::default(),
        }
    }
}

impl Default for LadrConfig {
    fn default() -> Self {
        LadrConfig {
            mace4: "mace4".to_owned(),
            prover9: "prover9".to_owned(),
            isofilter: "isofilter".to_owned(),
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        DiagramConfig {
            dot: "dot".to_owned(),

            node_width: ConfigOption {
                name: "node_width",
                min: 0.01,
                max: 2.0,
                value: 0.15,
            },

            font_size: ConfigOption {
                name: "font_size",
                min: 1,
                max: 72,
                value: 10,
            },

            highlight_colour: "red".to_owned(),
            base_colour: "black".to_owned(),
        }
    }
}
