//! Declaration macro for option kinds.

#[doc(hidden)]
#[macro_export]
macro_rules! __option_value_ty {
	(Size) => {
		u64
	};
	(Text) => {
		::std::string::String
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __option_default {
	(Size, $default:expr) => {{
		let value: u64 = $default;
		value
	}};
	(Text, $default:expr) => {
		::std::string::String::from($default)
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __option_ctor {
	($vis:vis, Size) => {
		/// Creates the option with the given value.
		$vis fn new(value: u64) -> Self {
			Self(value)
		}

		/// Replaces the option's value.
		$vis fn set_value(&mut self, value: u64) {
			self.0 = value;
		}
	};
	($vis:vis, Text) => {
		/// Creates the option with the given value.
		$vis fn new(value: impl Into<::std::string::String>) -> Self {
			Self(value.into())
		}

		/// Replaces the option's value.
		$vis fn set_value(&mut self, value: impl Into<::std::string::String>) {
			self.0 = value.into();
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __option_validator {
	() => {
		::core::option::Option::None
	};
	($validate:expr) => {
		::core::option::Option::Some($validate)
	};
}

/// Declares an option kind and registers it with the option catalog.
///
/// This macro generates:
/// - A newtype struct holding the option's value (`u64` for `Size`,
///   `String` for `Text`)
/// - `Default`, a `new` constructor, a `set_value` setter, and a [`RegistryOption`](crate::RegistryOption) impl
/// - An [`OptionDecl`](crate::OptionDecl) submitted for
///   [`Catalog::from_inventory`](crate::Catalog::from_inventory)
///
/// # Example
///
/// ```ignore
/// option! {
///     /// HTTP request method.
///     pub struct RequestMethod {
///         key: "request-method",
///         type: Text,
///         default: "GET",
///         description: "HTTP request method",
///     }
/// }
///
/// let mut registry = OptionRegistry::new();
/// registry.set(RequestMethod::new("POST"));
/// assert_eq!(registry.get::<RequestMethod>().value(), "POST");
/// ```
///
/// The optional `validate:` field takes a
/// [`OptionValidator`](crate::OptionValidator), applied when the option is set
/// by config key.
#[macro_export]
macro_rules! option {
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			key: $key:literal,
			type: $shape:ident,
			default: $default:expr,
			description: $desc:literal
			$(, validate: $validate:expr)?
			$(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash)]
		$vis struct $name($crate::__option_value_ty!($shape));

		impl $name {
			$crate::__option_ctor!($vis, $shape);
		}

		impl ::core::default::Default for $name {
			fn default() -> Self {
				Self($crate::__option_default!($shape, $default))
			}
		}

		impl $crate::RegistryOption for $name {
			type Value = $crate::__option_value_ty!($shape);

			const KEY: &'static str = $key;

			fn from_value(value: Self::Value) -> Self {
				Self(value)
			}

			fn value(&self) -> &Self::Value {
				&self.0
			}

			fn into_value(self) -> Self::Value {
				self.0
			}
		}

		impl ::core::convert::From<$crate::__option_value_ty!($shape)> for $name {
			fn from(value: $crate::__option_value_ty!($shape)) -> Self {
				Self(value)
			}
		}

		$crate::inventory::submit! {
			$crate::OptionDecl {
				key: $key,
				type_name: concat!(module_path!(), "::", stringify!($name)),
				description: $desc,
				shape: $crate::ValueShape::$shape,
				id: <$name as $crate::RegistryOption>::id,
				default: || $crate::OptionShape::lower(
					<$name as $crate::RegistryOption>::into_value(
						<$name as ::core::default::Default>::default(),
					),
				),
				validator: $crate::__option_validator!($($validate)?),
			}
		}
	};
}
