//! The contract every option kind implements.

use crate::{OptionId, ShapeError, TaggedValue, ValueShape};

// Seal OptionShape so option values always map onto a stored shape.
mod sealed {
	pub trait Sealed {}
	impl Sealed for u64 {}
	impl Sealed for String {}
}

/// Rust types that an option value can be lowered from and lifted into.
///
/// Implemented for `u64` ([`ValueShape::Size`]) and `String`
/// ([`ValueShape::Text`]) only.
pub trait OptionShape: sealed::Sealed + Sized {
	/// The stored shape corresponding to this Rust type.
	const SHAPE: ValueShape;

	/// Converts the value into a fresh storage cell.
	fn lower(self) -> TaggedValue;

	/// Writes the value into an existing cell, reusing its buffer where possible.
	fn assign(self, cell: &mut TaggedValue);

	/// Reads the value back out of a cell.
	///
	/// An empty cell lifts to `None`. A cell of the other shape is an error.
	fn lift(cell: &TaggedValue) -> Result<Option<Self>, ShapeError>;
}

impl OptionShape for u64 {
	const SHAPE: ValueShape = ValueShape::Size;

	fn lower(self) -> TaggedValue {
		TaggedValue::Size(self)
	}

	fn assign(self, cell: &mut TaggedValue) {
		cell.assign_size(self);
	}

	fn lift(cell: &TaggedValue) -> Result<Option<Self>, ShapeError> {
		match cell {
			TaggedValue::Absent => Ok(None),
			_ => cell.size_value().map(Some),
		}
	}
}

impl OptionShape for String {
	const SHAPE: ValueShape = ValueShape::Text;

	fn lower(self) -> TaggedValue {
		TaggedValue::Text(self)
	}

	fn assign(self, cell: &mut TaggedValue) {
		match cell {
			TaggedValue::Text(_) => cell.assign_text(&self),
			_ => cell.assign_text_owned(self),
		}
	}

	fn lift(cell: &TaggedValue) -> Result<Option<Self>, ShapeError> {
		match cell {
			TaggedValue::Absent => Ok(None),
			_ => cell.text_value().map(|s| Some(s.to_owned())),
		}
	}
}

/// A strongly typed configuration setting stored in an
/// [`OptionRegistry`](crate::OptionRegistry).
///
/// Each implementing type is its own option kind: its identity is the Rust
/// type itself (see [`OptionId`]), its stored shape is fixed by
/// [`Value`](Self::Value), and [`Default`] supplies the value returned when
/// the option was never set.
///
/// Most option kinds are declared with the [`option!`](crate::option) macro.
pub trait RegistryOption: Default + Sized + 'static {
	/// Underlying value type, `u64` or `String`.
	type Value: OptionShape;

	/// Config key, unique within a [`Catalog`](crate::Catalog).
	const KEY: &'static str;

	/// Constructs the option from a value.
	fn from_value(value: Self::Value) -> Self;

	/// Returns the option's value.
	fn value(&self) -> &Self::Value;

	/// Consumes the option, returning its value.
	fn into_value(self) -> Self::Value;

	/// Returns the identifier of this option kind.
	fn id() -> OptionId {
		OptionId::of::<Self>()
	}
}
