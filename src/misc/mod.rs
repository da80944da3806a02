//! Miscelanous items.

pub mod log;
pub(crate) mod pipe;
