//! Catalog of declared option kinds.
//!
//! Typed access through [`OptionRegistry::set`](crate::OptionRegistry::set) and
//! [`OptionRegistry::get`](crate::OptionRegistry::get) needs no catalog. The
//! catalog serves the untyped paths (config files, string values) where an
//! option is named by its config key, and it is where key collisions between
//! independently written option modules are detected.
//!
//! Options declared with [`option!`](crate::option) submit an [`OptionDecl`]
//! to a link-time collection; [`Catalog::from_inventory`] gathers them.

use rustc_hash::FxHashMap as HashMap;

use crate::{CatalogError, OptionError, OptionId, OptionShape, RegistryOption, TaggedValue, ValueShape};


/// Extra check applied to values arriving through untyped paths.
pub type OptionValidator = fn(&TaggedValue) -> Result<(), String>;

/// Static description of an option kind.
#[derive(Debug, Clone, Copy)]
pub struct OptionDecl {
	/// Config key.
	pub key: &'static str,
	/// Rust path of the option type, for diagnostics.
	pub type_name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Declared value shape.
	pub shape: ValueShape,
	/// Identity of the option type.
	pub id: fn() -> OptionId,
	/// Default value factory.
	pub default: fn() -> TaggedValue,
	/// Optional validator for untyped values.
	pub validator: Option<OptionValidator>,
}

inventory::collect!(OptionDecl);

impl OptionDecl {
	/// Builds a declaration for option type `O`.
	pub fn of<O: RegistryOption>(description: &'static str) -> Self {
		Self {
			key: O::KEY,
			type_name: std::any::type_name::<O>(),
			description,
			shape: <O::Value as OptionShape>::SHAPE,
			id: O::id,
			default: || O::default().into_value().lower(),
			validator: None,
		}
	}

	/// Attaches a validator.
	pub fn with_validator(mut self, validator: OptionValidator) -> Self {
		self.validator = Some(validator);
		self
	}

	/// Returns the identity of the declared option type.
	pub fn option_id(&self) -> OptionId {
		(self.id)()
	}

	/// Returns the option's default value.
	pub fn default_value(&self) -> TaggedValue {
		(self.default)()
	}

	/// Checks that `value` has the declared shape and passes the validator.
	pub fn validate(&self, value: &TaggedValue) -> Result<(), OptionError> {
		if !value.matches_shape(self.shape) {
			return Err(OptionError::TypeMismatch {
				option: self.key.to_string(),
				expected: self.shape,
				got: value.type_name(),
			});
		}
		if let Some(validator) = self.validator {
			validator(value).map_err(|reason| OptionError::InvalidValue {
				option: self.key.to_string(),
				reason,
			})?;
		}
		Ok(())
	}
}

/// Index of option declarations by config key and by identity.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	by_key: HashMap<&'static str, OptionDecl>,
	by_id: HashMap<OptionId, &'static str>,
}

impl Catalog {
	/// Creates an empty catalog.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a catalog from every option declared with [`option!`](crate::option)
	/// in the linked program.
	///
	/// Fails on the first config key claimed by two distinct option types.
	pub fn from_inventory() -> Result<Self, CatalogError> {
		let mut catalog = Self::new();
		for decl in inventory::iter::<OptionDecl> {
			catalog.register(*decl)?;
		}
		tracing::debug!(options = catalog.len(), "built option catalog");
		Ok(catalog)
	}

	/// Adds a declaration.
	///
	/// Registering the same option type again is a no-op. Registering a
	/// different type under an existing key fails.
	pub fn register(&mut self, decl: OptionDecl) -> Result<(), CatalogError> {
		let id = decl.option_id();
		if let Some(existing) = self.by_key.get(decl.key) {
			if existing.option_id() == id {
				return Ok(());
			}
			return Err(CatalogError::DuplicateKey {
				key: decl.key,
				existing: existing.type_name,
				new: decl.type_name,
			});
		}
		tracing::trace!(option = decl.key, shape = %decl.shape, "registered option");
		self.by_id.insert(id, decl.key);
		self.by_key.insert(decl.key, decl);
		Ok(())
	}

	/// Adds option type `O` without a validator.
	pub fn register_option<O: RegistryOption>(
		&mut self,
		description: &'static str,
	) -> Result<(), CatalogError> {
		self.register(OptionDecl::of::<O>(description))
	}

	/// Looks up a declaration by config key.
	pub fn get(&self, key: &str) -> Option<&OptionDecl> {
		self.by_key.get(key)
	}

	/// Looks up a declaration by option identity.
	pub fn by_id(&self, id: OptionId) -> Option<&OptionDecl> {
		self.by_id.get(&id).and_then(|key| self.by_key.get(key))
	}

	/// Looks up a declaration, producing an error with a suggestion if missing.
	pub fn lookup(&self, key: &str) -> Result<&OptionDecl, OptionError> {
		self.get(key).ok_or_else(|| OptionError::UnknownOption {
			key: key.to_string(),
			suggestion: self.suggest(key).map(str::to_string),
		})
	}

	/// Suggests a similar config key using edit distance.
	pub fn suggest(&self, key: &str) -> Option<&'static str> {
		self.by_key
			.keys()
			.copied()
			.map(|k| (strsim::levenshtein(key, k), k))
			.filter(|&(dist, _)| dist <= 3)
			.min()
			.map(|(_, k)| k)
	}

	/// Returns all declarations sorted by config key.
	pub fn iter(&self) -> impl Iterator<Item = &OptionDecl> {
		let mut decls: Vec<_> = self.by_key.values().collect();
		decls.sort_by_key(|d| d.key);
		decls.into_iter()
	}

	/// Returns the number of declared options.
	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	/// Returns `true` if no options are declared.
	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}
}
