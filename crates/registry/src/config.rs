//! Option configuration from TOML.
//!
//! Options live in an `[options]` table keyed by config key:
//!
//! ```toml
//! [options]
//! request-method = "POST"
//! max-redirects = 5
//! ```
//!
//! Size options take non-negative integers or any string accepted by
//! [`parse_size`](crate::parse::parse_size). Text options take strings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::parse::parse_value_for_shape;
use crate::{Catalog, OptionDecl, OptionError, OptionRegistry, TaggedValue, ValueShape};


/// Errors from loading option configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Reading the config file failed.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	/// The document is not valid TOML or has an unexpected layout.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
	/// An option entry was rejected.
	#[error(transparent)]
	Option(#[from] OptionError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
	#[serde(default)]
	options: toml::Table,
}

/// Loads a registry from a TOML document.
pub fn load_str(catalog: &Catalog, input: &str) -> Result<OptionRegistry, ConfigError> {
	let mut registry = OptionRegistry::new();
	apply_str(&mut registry, catalog, input)?;
	Ok(registry)
}

/// Loads a registry from a TOML file.
pub fn load_file(catalog: &Catalog, path: impl AsRef<Path>) -> Result<OptionRegistry, ConfigError> {
	let path = path.as_ref();
	let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	load_str(catalog, &input)
}

/// Merges the options of a TOML document into `registry`.
///
/// Either every option in the document is applied or, on error, none is.
/// Returns the number of options applied.
pub fn apply_str(
	registry: &mut OptionRegistry,
	catalog: &Catalog,
	input: &str,
) -> Result<usize, ConfigError> {
	let file: ConfigFile = toml::from_str(input)?;

	let mut staged = OptionRegistry::new();
	for (key, value) in &file.options {
		let decl = catalog.lookup(key)?;
		let cell = value_from_toml(decl, value)?;
		staged.set_raw(catalog, key, cell)?;
	}

	registry.set_all(&staged);
	tracing::debug!(applied = staged.len(), "applied option config");
	Ok(staged.len())
}

fn value_from_toml(decl: &OptionDecl, value: &toml::Value) -> Result<TaggedValue, OptionError> {
	match (decl.shape, value) {
		(ValueShape::Size, toml::Value::Integer(i)) => {
			u64::try_from(*i)
				.map(TaggedValue::Size)
				.map_err(|_| OptionError::InvalidValue {
					option: decl.key.to_string(),
					reason: format!("expected a non-negative integer, got {i}"),
				})
		}
		(shape, toml::Value::String(s)) => {
			parse_value_for_shape(s, shape).map_err(|reason| OptionError::InvalidValue {
				option: decl.key.to_string(),
				reason,
			})
		}
		(shape, other) => Err(OptionError::TypeMismatch {
			option: decl.key.to_string(),
			expected: shape,
			got: other.type_str(),
		}),
	}
}
