//! Storage cell for a single option value.
//!
//! Every option kind maps onto one of two underlying shapes: an unsigned size
//! or an owned text buffer. [`TaggedValue`] holds exactly one of them (or
//! nothing). Dropping or reassigning a cell releases the text buffer through
//! the enum's own drop glue, so no payload is ever live alongside another.

use std::collections::TryReserveError;
use std::fmt;


/// The two underlying shapes an option value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
	/// Unsigned size value.
	Size,
	/// Owned text value.
	Text,
}

impl ValueShape {
	/// Returns the type name used in diagnostics.
	pub fn type_name(self) -> &'static str {
		match self {
			ValueShape::Size => "size",
			ValueShape::Text => "text",
		}
	}
}

impl fmt::Display for ValueShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.type_name())
	}
}

/// A checked accessor asked for a shape the cell does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wrong value shape: expected {expected}, found {found}")]
pub struct ShapeError {
	/// Shape the caller asked for.
	pub expected: ValueShape,
	/// Type name of the shape actually stored (`"absent"` for an empty cell).
	pub found: &'static str,
}

/// The value of an option, as stored in the registry.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum TaggedValue {
	/// No value.
	#[default]
	Absent,
	/// Unsigned size value.
	Size(u64),
	/// Owned text value.
	Text(String),
}

impl TaggedValue {
	/// Creates an empty cell.
	pub const fn new() -> Self {
		TaggedValue::Absent
	}

	/// Returns the active shape, or `None` for an empty cell.
	pub fn shape(&self) -> Option<ValueShape> {
		match self {
			TaggedValue::Absent => None,
			TaggedValue::Size(_) => Some(ValueShape::Size),
			TaggedValue::Text(_) => Some(ValueShape::Text),
		}
	}

	/// Returns `true` if the cell holds no value.
	pub fn is_absent(&self) -> bool {
		matches!(self, TaggedValue::Absent)
	}

	/// Returns the type name of the active shape.
	pub fn type_name(&self) -> &'static str {
		self.shape().map_or("absent", ValueShape::type_name)
	}

	/// Returns true if the active shape is `shape`.
	pub fn matches_shape(&self, shape: ValueShape) -> bool {
		self.shape() == Some(shape)
	}

	/// Returns the size payload.
	pub fn size_value(&self) -> Result<u64, ShapeError> {
		match self {
			TaggedValue::Size(v) => Ok(*v),
			_ => Err(self.mismatch(ValueShape::Size)),
		}
	}

	/// Returns the text payload.
	pub fn text_value(&self) -> Result<&str, ShapeError> {
		match self {
			TaggedValue::Text(v) => Ok(v),
			_ => Err(self.mismatch(ValueShape::Text)),
		}
	}

	/// Moves the value out, leaving the cell [`Absent`](TaggedValue::Absent).
	pub fn take(&mut self) -> TaggedValue {
		std::mem::take(self)
	}

	/// Replaces the value with a size, releasing any text buffer first.
	pub fn assign_size(&mut self, v: u64) {
		*self = TaggedValue::Size(v);
	}

	/// Replaces the value with a copy of `v`.
	///
	/// An existing text buffer is overwritten in place so its allocation is
	/// reused when large enough.
	pub fn assign_text(&mut self, v: &str) {
		match self {
			TaggedValue::Text(buf) => {
				buf.clear();
				buf.push_str(v);
			}
			_ => *self = TaggedValue::Text(v.to_owned()),
		}
	}

	/// Replaces the value with `v`, taking ownership of its buffer.
	pub fn assign_text_owned(&mut self, v: String) {
		*self = TaggedValue::Text(v);
	}

	/// Like [`assign_text`](Self::assign_text), but reports allocation failure
	/// instead of aborting.
	///
	/// On failure the cell is left unchanged.
	pub fn try_assign_text(&mut self, v: &str) -> Result<(), TryReserveError> {
		match self {
			TaggedValue::Text(buf) => {
				if buf.capacity() < v.len() {
					buf.try_reserve_exact(v.len() - buf.len())?;
				}
				buf.clear();
				buf.push_str(v);
			}
			_ => {
				let mut buf = String::new();
				buf.try_reserve_exact(v.len())?;
				buf.push_str(v);
				*self = TaggedValue::Text(buf);
			}
		}
		Ok(())
	}

	fn mismatch(&self, expected: ValueShape) -> ShapeError {
		ShapeError {
			expected,
			found: self.type_name(),
		}
	}
}

impl Clone for TaggedValue {
	fn clone(&self) -> Self {
		match self {
			TaggedValue::Absent => TaggedValue::Absent,
			TaggedValue::Size(v) => TaggedValue::Size(*v),
			TaggedValue::Text(v) => TaggedValue::Text(v.clone()),
		}
	}

	fn clone_from(&mut self, source: &Self) {
		match source {
			TaggedValue::Text(v) => self.assign_text(v),
			_ => *self = source.clone(),
		}
	}
}

impl From<u64> for TaggedValue {
	fn from(v: u64) -> Self {
		TaggedValue::Size(v)
	}
}

impl From<String> for TaggedValue {
	fn from(v: String) -> Self {
		TaggedValue::Text(v)
	}
}

impl From<&str> for TaggedValue {
	fn from(v: &str) -> Self {
		TaggedValue::Text(v.to_owned())
	}
}

impl fmt::Display for TaggedValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TaggedValue::Absent => f.write_str("<absent>"),
			TaggedValue::Size(v) => write!(f, "{v}"),
			TaggedValue::Text(v) => write!(f, "{v:?}"),
		}
	}
}
