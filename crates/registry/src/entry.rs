use crate::{OptionId, TaggedValue};

/// An option's identity paired with its stored value.
///
/// Equality compares identity only, so an entry matches any other entry
/// (or bare [`OptionId`]) of the same option kind regardless of value.
#[derive(Debug, Clone)]
pub struct Entry {
	id: OptionId,
	value: TaggedValue,
}

impl Entry {
	/// Creates an entry for `id` holding `value`.
	pub fn new(id: OptionId, value: TaggedValue) -> Self {
		Self { id, value }
	}

	/// Returns the option identity.
	pub fn id(&self) -> OptionId {
		self.id
	}

	/// Returns the stored value.
	pub fn value(&self) -> &TaggedValue {
		&self.value
	}

	/// Returns the stored value for in-place replacement.
	pub fn value_mut(&mut self) -> &mut TaggedValue {
		&mut self.value
	}

	/// Consumes the entry, returning its value.
	pub fn into_value(self) -> TaggedValue {
		self.value
	}
}

impl PartialEq for Entry {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Entry {}

impl PartialEq<OptionId> for Entry {
	fn eq(&self, other: &OptionId) -> bool {
		self.id == *other
	}
}
