//! Option kinds used by unit tests.

use crate::{TaggedValue, option};

option! {
	/// Request verb.
	pub struct Method {
		key: "method",
		type: Text,
		default: "GET",
		description: "Request verb",
		validate: non_empty,
	}
}

option! {
	/// Redirect limit.
	pub struct Redirects {
		key: "redirects",
		type: Size,
		default: 8,
		description: "Redirect limit",
	}
}

option! {
	/// Client identification string.
	pub struct Agent {
		key: "agent",
		type: Text,
		default: "",
		description: "Client identification string",
	}
}

option! {
	/// Retry count.
	pub struct Retries {
		key: "retries",
		type: Size,
		default: 0,
		description: "Retry count",
	}
}

fn non_empty(value: &TaggedValue) -> Result<(), String> {
	match value.text_value() {
		Ok("") => Err("must not be empty".to_string()),
		_ => Ok(()),
	}
}
