//! Parsing of option values from strings.
//!
//! Used by config loading and by callers that accept options as text (for
//! example command-line `key=value` pairs).

use crate::{Catalog, OptionError, TaggedValue, ValueShape};

#[cfg(test)]
mod tests;

/// Parses `value` for the option named `key`, checking shape and validator.
pub fn parse_value(catalog: &Catalog, key: &str, value: &str) -> Result<TaggedValue, OptionError> {
	let decl = catalog.lookup(key)?;
	let parsed = match decl.shape {
		ValueShape::Text => {
			let mut cell = TaggedValue::new();
			cell.try_assign_text(value)
				.map_err(|source| OptionError::Alloc {
					option: key.to_string(),
					source,
				})?;
			cell
		}
		shape => parse_value_for_shape(value, shape).map_err(|reason| {
			OptionError::InvalidValue {
				option: key.to_string(),
				reason,
			}
		})?,
	};
	decl.validate(&parsed)?;
	Ok(parsed)
}

/// Parses `value` into a cell of the given shape.
pub fn parse_value_for_shape(value: &str, shape: ValueShape) -> Result<TaggedValue, String> {
	match shape {
		ValueShape::Size => parse_size(value).map(TaggedValue::Size),
		ValueShape::Text => Ok(TaggedValue::from(value)),
	}
}

/// Parses a size: decimal, `0x`-prefixed hex, or `max`/`unlimited`.
pub fn parse_size(value: &str) -> Result<u64, String> {
	let trimmed = value.trim();
	if trimmed.eq_ignore_ascii_case("max") || trimmed.eq_ignore_ascii_case("unlimited") {
		return Ok(u64::MAX);
	}
	let invalid = || format!("invalid size: '{value}'");
	let (digits, radix) = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
		Some(hex) => (hex, 16),
		None => (trimmed, 10),
	};
	// from_str_radix accepts a leading sign
	if digits.starts_with(['+', '-']) {
		return Err(invalid());
	}
	u64::from_str_radix(digits, radix).map_err(|_| invalid())
}
