//! Built-in options.
//!
//! Request and TLS settings consumed by transports. Each option is its own
//! type and is stored in an [`OptionRegistry`](fetchopt_registry::OptionRegistry):
//!
//! ```ignore
//! use fetchopt_options::{MaxRedirects, RequestMethod};
//! use fetchopt_registry::OptionRegistry;
//!
//! let mut options = OptionRegistry::new();
//! options.set(RequestMethod::new("POST"));
//! options.set(MaxRedirects::new(5));
//!
//! assert_eq!(options.get::<RequestMethod>().value(), "POST");
//! ```

use fetchopt_registry::{Catalog, CatalogError};

mod impls;

/// HTTP request options.
pub mod http {
	pub use crate::impls::http::*;
}

/// TLS options.
pub mod ssl {
	pub use crate::impls::ssl::*;
}

pub use http::{MaxRedirects, RequestContent, RequestContentType, RequestMethod, UserAgent};
pub use ssl::{SslVerifyMode, VerifyMode};

/// Builds a catalog of every declared option, including the built-ins.
pub fn catalog() -> Result<Catalog, CatalogError> {
	Catalog::from_inventory()
}
