use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::RegistryOption;

/// Identity of an option kind.
///
/// Derived from the option's Rust type, so two distinct option types can
/// never share an identifier. The config key is carried along for
/// diagnostics only and takes no part in equality.
#[derive(Clone, Copy)]
pub struct OptionId {
	type_id: TypeId,
	key: &'static str,
}

impl OptionId {
	/// Returns the identifier of option type `O`.
	pub fn of<O: RegistryOption>() -> Self {
		Self {
			type_id: TypeId::of::<O>(),
			key: O::KEY,
		}
	}

	/// Returns the config key of the option this identifies.
	pub fn key(&self) -> &'static str {
		self.key
	}
}

impl PartialEq for OptionId {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for OptionId {}

impl Hash for OptionId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state);
	}
}

impl fmt::Debug for OptionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("OptionId").field(&self.key).finish()
	}
}

impl fmt::Display for OptionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key)
	}
}
