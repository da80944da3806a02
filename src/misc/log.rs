/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly around calls to external tools.

Note, no log implementation is provided.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [backend](crate::backend), i.e. calls to mace4, prover9, and isofilter.
    pub const BACKEND: &str = "backend";

    /// Logs related to parsing interpretations and theories.
    pub const PARSE: &str = "parse";

    /// Logs related to [diagrams](crate::diagram).
    pub const DIAGRAM: &str = "diagram";

    /// Logs related to a fine spectrum.
    pub const SPECTRUM: &str = "spectrum";

    /// Logs related to [compatible preorders](crate::procedures::preorders).
    pub const COMPATIBILITY: &str = "compatibility";

    /// Logs related to [checks](crate::procedures::check).
    pub const CHECK: &str = "check";
}
