//! Built-in option implementations.

pub(crate) mod http;
pub(crate) mod ssl;
