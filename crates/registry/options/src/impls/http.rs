//! HTTP request options.

use fetchopt_registry::{TaggedValue, option};

option! {
	/// HTTP request method.
	///
	/// Defaults to `GET`.
	pub struct RequestMethod {
		key: "request-method",
		type: Text,
		default: "GET",
		description: "HTTP request method",
		validate: validate_method,
	}
}

option! {
	/// Body sent with the request.
	///
	/// Defaults to an empty body.
	pub struct RequestContent {
		key: "request-content",
		type: Text,
		default: "",
		description: "Request body content",
	}
}

option! {
	/// `Content-Type` of the request body.
	///
	/// Defaults to empty, meaning no header is sent.
	pub struct RequestContentType {
		key: "request-content-type",
		type: Text,
		default: "",
		description: "Content type of the request body",
	}
}

option! {
	/// Maximum number of redirects to follow.
	///
	/// Defaults to [`MaxRedirects::UNLIMITED`].
	pub struct MaxRedirects {
		key: "max-redirects",
		type: Size,
		default: MaxRedirects::UNLIMITED,
		description: "Maximum number of redirects to follow",
	}
}

option! {
	/// `User-Agent` header value.
	///
	/// Defaults to empty, meaning no header is sent.
	pub struct UserAgent {
		key: "user-agent",
		type: Text,
		default: "",
		description: "User agent string sent with requests",
	}
}

impl MaxRedirects {
	/// Redirect limit meaning "follow any number of redirects".
	pub const UNLIMITED: u64 = u64::MAX;

	/// Returns `true` if no redirect limit applies.
	pub fn is_unlimited(&self) -> bool {
		self.0 == Self::UNLIMITED
	}
}

// RFC 9110 token characters.
fn is_tchar(c: char) -> bool {
	c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

fn validate_method(value: &TaggedValue) -> Result<(), String> {
	let method = value.text_value().map_err(|e| e.to_string())?;
	if method.is_empty() {
		return Err("request method must not be empty".to_string());
	}
	match method.chars().find(|&c| !is_tchar(c)) {
		Some(c) => Err(format!("invalid character {c:?} in request method")),
		None => Ok(()),
	}
}
