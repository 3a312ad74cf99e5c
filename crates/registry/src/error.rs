use std::collections::TryReserveError;

use crate::ValueShape;

/// Errors from untyped option access (by config key).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
	/// The config key is not in the catalog.
	#[error("unknown option: {key}{}", suggestion_suffix(.suggestion))]
	UnknownOption {
		key: String,
		suggestion: Option<String>,
	},
	/// The value's shape does not match the option's declared shape.
	#[error("type mismatch for option '{option}': expected {expected}, got {got}")]
	TypeMismatch {
		option: String,
		expected: ValueShape,
		got: &'static str,
	},
	/// The value was rejected by the parser or the option's validator.
	#[error("invalid value for option '{option}': {reason}")]
	InvalidValue { option: String, reason: String },
	/// Allocating the text buffer failed.
	#[error("allocation failed for option '{option}': {source}")]
	Alloc {
		option: String,
		#[source]
		source: TryReserveError,
	},
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
	suggestion
		.as_deref()
		.map(|s| format!(" (did you mean '{s}'?)"))
		.unwrap_or_default()
}

/// Errors from building a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	/// Two distinct option types declared the same config key.
	#[error("duplicate option key {key:?}: declared by {existing} and {new}")]
	DuplicateKey {
		key: &'static str,
		existing: &'static str,
		new: &'static str,
	},
}
