/*!
Callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use crate::backend::Backend;

use super::GenericContext;

/// Called with the count of models at each cardinality of a fine spectrum, starting from cardinality 1.
pub type CallbackOnSpectrum = dyn FnMut(&[usize]);

impl<B: Backend> GenericContext<B> {
    /// Set a callback to be made when a fine spectrum is complete.
    pub fn set_callback_spectrum(&mut self, callback: Box<CallbackOnSpectrum>) {
        self.callback_spectrum = Some(callback);
    }

    /// Make the callback set to be made when a fine spectrum is complete.
    pub fn make_callback_spectrum(&mut self, counts: &[usize]) {
        if let Some(callback) = &mut self.callback_spectrum {
            callback(counts);
        }
    }
}
