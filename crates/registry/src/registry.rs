//! Runtime storage for option values.
//!
//! An [`OptionRegistry`] holds at most one value per option kind. Feature
//! modules define their own [`RegistryOption`] types and read and write them
//! here without the registry knowing the full set of kinds in advance.
//!
//! Registries are plain values: cloning produces an independent deep copy,
//! and moving out with [`std::mem::take`] leaves an empty registry behind.
//! There is no internal synchronization.

use crate::{Catalog, Entry, OptionError, OptionId, OptionShape, RegistryOption, ShapeError, TaggedValue};


/// A collection of option values keyed by option kind.
///
/// Lookup is a linear scan; registries hold a handful of options at most.
/// Iteration follows first-insertion order, but nothing depends on it.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
	entries: Vec<Entry>,
}

impl OptionRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	fn position(&self, id: OptionId) -> Option<usize> {
		self.entries.iter().position(|e| *e == id)
	}

	/// Sets an option, replacing any previous value of the same kind.
	///
	/// An existing entry is overwritten in place; its text buffer is reused.
	pub fn set<O: RegistryOption>(&mut self, option: O) {
		let id = O::id();
		let value = option.into_value();
		match self.position(id) {
			Some(idx) => value.assign(self.entries[idx].value_mut()),
			None => self.entries.push(Entry::new(id, value.lower())),
		}
		tracing::trace!(option = id.key(), "option set");
	}

	/// Copies every option from `other` into this registry.
	///
	/// Options only present here are left alone; options present in both are
	/// overwritten from `other`. Entries of `other` whose value was moved out
	/// (see [`take_value`](Self::take_value)) count as unset and are skipped.
	pub fn set_all(&mut self, other: &OptionRegistry) {
		for entry in other.entries.iter().filter(|e| !e.value().is_absent()) {
			match self.position(entry.id()) {
				Some(idx) => self.entries[idx].value_mut().clone_from(entry.value()),
				None => self.entries.push(entry.clone()),
			}
		}
		tracing::debug!(merged = other.len(), total = self.len(), "merged option registry");
	}

	/// Gets an option, or its default if it is not set.
	///
	/// A stored value of the wrong shape can only come from misuse of the
	/// untyped API; it is logged and treated as unset.
	pub fn get<O: RegistryOption>(&self) -> O {
		match self.try_get::<O>() {
			Ok(Some(option)) => option,
			Ok(None) => O::default(),
			Err(err) => {
				tracing::warn!(option = O::KEY, error = %err, "ignoring stored option value");
				O::default()
			}
		}
	}

	/// Gets an option, returning `Ok(None)` if it is not set.
	pub fn try_get<O: RegistryOption>(&self) -> Result<Option<O>, ShapeError> {
		let Some(entry) = self.entry(O::id()) else {
			return Ok(None);
		};
		Ok(O::Value::lift(entry.value())?.map(O::from_value))
	}

	/// Removes an option, returning its stored value if it was set.
	pub fn clear<O: RegistryOption>(&mut self) -> Option<TaggedValue> {
		let removed = self.remove(O::id());
		if removed.is_some() {
			tracing::trace!(option = O::KEY, "option cleared");
		}
		removed
	}

	/// Removes the entry for `id`, returning its stored value.
	pub fn remove(&mut self, id: OptionId) -> Option<TaggedValue> {
		let idx = self.position(id)?;
		Some(self.entries.remove(idx).into_value())
	}

	/// Moves the stored value for `id` out, leaving the entry in place but
	/// [`Absent`](TaggedValue::Absent).
	///
	/// A subsequent [`get`](Self::get) returns the option's default.
	pub fn take_value(&mut self, id: OptionId) -> Option<TaggedValue> {
		self.entry_mut(id).map(|e| e.value_mut().take())
	}

	/// Returns `true` if option kind `O` has an entry.
	pub fn contains<O: RegistryOption>(&self) -> bool {
		self.position(O::id()).is_some()
	}

	/// Returns the entry for `id`.
	pub fn entry(&self, id: OptionId) -> Option<&Entry> {
		self.entries.iter().find(|e| **e == id)
	}

	/// Returns the entry for `id` for in-place modification.
	pub fn entry_mut(&mut self, id: OptionId) -> Option<&mut Entry> {
		self.entries.iter_mut().find(|e| **e == id)
	}

	/// Sets an option by config key from an untyped value.
	///
	/// The value must match the declared shape and pass the option's validator.
	pub fn set_raw(
		&mut self,
		catalog: &Catalog,
		key: &str,
		value: TaggedValue,
	) -> Result<(), OptionError> {
		let decl = catalog.lookup(key)?;
		decl.validate(&value)?;
		let id = decl.option_id();
		match self.position(id) {
			Some(idx) => *self.entries[idx].value_mut() = value,
			None => self.entries.push(Entry::new(id, value)),
		}
		tracing::trace!(option = key, "option set from raw value");
		Ok(())
	}

	/// Gets an option's value by config key, falling back to its default.
	///
	/// Only an unknown key is an error. Validators are not run: values set
	/// through the typed API are accepted as stored. A value of the wrong
	/// shape is logged and treated as unset, as in [`get`](Self::get).
	pub fn get_raw(&self, catalog: &Catalog, key: &str) -> Result<TaggedValue, OptionError> {
		let decl = catalog.lookup(key)?;
		match self.entry(decl.option_id()).map(Entry::value) {
			Some(value) if value.matches_shape(decl.shape) => Ok(value.clone()),
			Some(value) if !value.is_absent() => {
				tracing::warn!(
					option = decl.key,
					expected = %decl.shape,
					found = value.type_name(),
					"ignoring stored option value"
				);
				Ok(decl.default_value())
			}
			_ => Ok(decl.default_value()),
		}
	}

	/// Returns the number of options set.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no options are set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns an iterator over all entries.
	pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
		self.entries.iter()
	}

	/// Removes every option.
	pub fn clear_all(&mut self) {
		self.entries.clear();
	}
}

impl Extend<Entry> for OptionRegistry {
	fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
		for entry in iter {
			match self.position(entry.id()) {
				Some(idx) => *self.entries[idx].value_mut() = entry.into_value(),
				None => self.entries.push(entry),
			}
		}
	}
}

impl FromIterator<Entry> for OptionRegistry {
	fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
		let mut registry = Self::new();
		registry.extend(iter);
		registry
	}
}

impl<'a> IntoIterator for &'a OptionRegistry {
	type Item = &'a Entry;
	type IntoIter = std::slice::Iter<'a, Entry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
