use crate::{backend::Ladr, config::Config};

use super::GenericContext;

/// A context which calls the LADR binaries.
pub type Context = GenericContext<Ladr>;

impl Context {
    /// Creates a context from some given configuration, with the LADR binaries named in the configuration.
    pub fn from_config(config: Config) -> Self {
        let backend = Ladr::new(config.ladr.clone());
        GenericContext::new(config, backend)
    }
}
