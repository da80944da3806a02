use crate::{backend::Backend, config::Config};

use super::callbacks::CallbackOnSpectrum;

/// A generic context, parameratised to a backend.
///
/// # Example
///
/// ```rust
/// # use p9_algebra::backend::Ladr;
/// # use p9_algebra::config::Config;
/// # use p9_algebra::context::GenericContext;
/// let config = Config::default();
/// let backend = Ladr::new(config.ladr.clone());
/// let context = GenericContext::new(config, backend);
/// ```
pub struct GenericContext<B: Backend> {
    /// The configuration of a context.
    pub config: Config,

    /// The backend to which queries are sent.
    pub backend: B,

    /// Called on completion of a fine spectrum.
    pub(super) callback_spectrum: Option<Box<CallbackOnSpectrum>>,
}

impl<B: Backend> GenericContext<B> {
    pub fn new(config: Config, backend: B) -> Self {
        GenericContext {
            config,
            backend,
            callback_spectrum: None,
        }
    }
}
