//! Typed runtime option registry.
//!
//! Feature modules (request method, redirect limits, TLS verification, ...)
//! each define their own option kind and store it in an [`OptionRegistry`]
//! without the registry knowing the full set of kinds in advance.
//!
//! - [`TaggedValue`] is the storage cell: absent, an unsigned size, or owned text
//! - [`RegistryOption`] is the contract an option kind implements; [`option!`]
//!   declares one
//! - [`OptionRegistry`] stores one [`Entry`] per kind with typed
//!   `set`/`get`/`clear` and a merging `set_all`
//! - [`Catalog`] indexes declared options by config key for the untyped paths
//!   in [`parse`] and [`config`]
//!
//! Option identity is the option's Rust type ([`OptionId`]), so independently
//! written modules cannot collide on identifiers. Config keys can still
//! collide; [`Catalog`] rejects that when it is built.

mod catalog;
pub mod config;
mod entry;
mod error;
mod id;
mod macros;
mod option;
pub mod parse;
mod registry;
mod value;

pub use catalog::{Catalog, OptionDecl, OptionValidator};
pub use config::ConfigError;
pub use entry::Entry;
pub use error::{CatalogError, OptionError};
pub use id::OptionId;
pub use option::{OptionShape, RegistryOption};
pub use registry::OptionRegistry;
pub use value::{ShapeError, TaggedValue, ValueShape};

#[doc(hidden)]
pub use inventory;

#[cfg(test)]
mod testing;
