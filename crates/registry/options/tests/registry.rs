use std::io::Write;

use fetchopt_options::{
	MaxRedirects, RequestContent, RequestContentType, RequestMethod, SslVerifyMode, UserAgent,
	VerifyMode,
};
use fetchopt_registry::{OptionRegistry, RegistryOption, TaggedValue, config};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn request_method_round_trip() {
	let mut r = OptionRegistry::new();
	r.set(RequestMethod::new("POST"));
	assert_eq!(r.get::<RequestMethod>().value(), "POST");
}

#[test]
fn verify_mode_size_option() {
	let mut r = OptionRegistry::new();
	assert_eq!(r.get::<SslVerifyMode>().mode(), VerifyMode::PEER);

	r.set(SslVerifyMode::from(VerifyMode::NONE));
	assert_eq!(*r.get::<SslVerifyMode>().value(), 0);
	assert_eq!(r.get::<SslVerifyMode>().mode(), VerifyMode::NONE);
}

#[test]
fn set_all_into_empty_registry() {
	let mut r = OptionRegistry::new();
	r.set(RequestMethod::new("PUT"));
	r.set(SslVerifyMode::from(VerifyMode::NONE));

	let mut r2 = OptionRegistry::new();
	r2.set_all(&r);

	assert_eq!(r2.get::<RequestMethod>(), r.get::<RequestMethod>());
	assert_eq!(r2.get::<SslVerifyMode>(), r.get::<SslVerifyMode>());
}

#[test]
fn clear_request_method_returns_get() {
	let mut r = OptionRegistry::new();
	r.set(RequestMethod::new("DELETE"));
	r.clear::<RequestMethod>();
	assert_eq!(r.get::<RequestMethod>().value(), "GET");
}

#[test]
fn options_do_not_interfere() {
	let mut r = OptionRegistry::new();
	r.set(RequestContent::new("{\"a\":1}"));
	r.set(RequestContentType::new("application/json"));
	r.set(UserAgent::new("fetchopt/0.1"));
	r.set(MaxRedirects::new(3));

	assert_eq!(r.len(), 4);
	assert_eq!(r.get::<RequestContent>().value(), "{\"a\":1}");
	assert_eq!(r.get::<RequestContentType>().value(), "application/json");
	assert_eq!(r.get::<UserAgent>().value(), "fetchopt/0.1");
	assert!(!r.get::<MaxRedirects>().is_unlimited());
	assert_eq!(r.get::<RequestMethod>().value(), "GET");
}

#[test]
fn copies_are_independent() {
	let mut original = OptionRegistry::new();
	original.set(UserAgent::new("original"));

	let mut copy = original.clone();
	copy.set(UserAgent::new("copy"));
	original.set(MaxRedirects::new(0));

	assert_eq!(original.get::<UserAgent>().value(), "original");
	assert_eq!(copy.get::<UserAgent>().value(), "copy");
	assert!(copy.get::<MaxRedirects>().is_unlimited());
}

#[test]
fn moved_value_reads_as_default() {
	let mut r = OptionRegistry::new();
	r.set(UserAgent::new("gone"));

	let moved = r.take_value(UserAgent::id());

	assert_eq!(moved, Some(TaggedValue::from("gone")));
	assert_eq!(r.get::<UserAgent>(), UserAgent::default());
}

#[test]
fn builtin_catalog_has_no_collisions() {
	let catalog = fetchopt_options::catalog().unwrap();
	for key in [
		"request-method",
		"request-content",
		"request-content-type",
		"max-redirects",
		"user-agent",
		"ssl-verify-mode",
	] {
		assert!(catalog.get(key).is_some(), "missing {key}");
	}
	assert_eq!(
		catalog.by_id(MaxRedirects::id()).map(|d| d.default_value()),
		Some(TaggedValue::Size(u64::MAX))
	);
}

#[test]
fn config_file_drives_builtin_options() {
	let catalog = fetchopt_options::catalog().unwrap();
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(
		file,
		r#"
[options]
request-method = "POST"
request-content-type = "text/plain"
max-redirects = 10
ssl-verify-mode = 0
"#
	)
	.unwrap();

	let r = config::load_file(&catalog, file.path()).unwrap();

	assert_eq!(r.get::<RequestMethod>().value(), "POST");
	assert_eq!(r.get::<RequestContentType>().value(), "text/plain");
	assert_eq!(*r.get::<MaxRedirects>().value(), 10);
	assert_eq!(r.get::<SslVerifyMode>().mode(), VerifyMode::NONE);
}

#[test]
fn config_rejects_invalid_builtin_values() {
	let catalog = fetchopt_options::catalog().unwrap();
	assert!(config::load_str(&catalog, "[options]\nrequest-method = \"GE T\"\n").is_err());
	assert!(config::load_str(&catalog, "[options]\nssl-verify-mode = 64\n").is_err());
	assert!(config::load_str(&catalog, "[options]\nuser-agent = 5\n").is_err());
}

#[test]
fn typed_values_read_back_by_key_unvalidated() {
	let catalog = fetchopt_options::catalog().unwrap();
	let mut r = OptionRegistry::new();
	r.set(RequestMethod::new("GET /"));
	r.set(SslVerifyMode::new(0x40));

	assert_eq!(r.get_raw(&catalog, "request-method"), Ok(TaggedValue::from("GET /")));
	assert_eq!(r.get_raw(&catalog, "ssl-verify-mode"), Ok(TaggedValue::Size(0x40)));
}

#[test]
fn adjusted_option_is_stored() {
	let mut redirects = MaxRedirects::default();
	assert!(redirects.is_unlimited());
	redirects.set_value(3);

	let mut agent = UserAgent::new("fetch/1");
	agent.set_value("fetch/2");

	let mut r = OptionRegistry::new();
	r.set(redirects);
	r.set(agent);

	assert_eq!(*r.get::<MaxRedirects>().value(), 3);
	assert_eq!(r.get::<UserAgent>().value(), "fetch/2");
}

proptest! {
	#[test]
	fn any_agent_round_trips(agent in ".*") {
		let mut r = OptionRegistry::new();
		r.set(UserAgent::new(agent.clone()));
		prop_assert_eq!(r.get::<UserAgent>().into_value(), agent);
	}

	#[test]
	fn clear_after_set_is_default(limit in any::<u64>()) {
		let mut r = OptionRegistry::new();
		r.set(MaxRedirects::new(limit));
		r.clear::<MaxRedirects>();
		prop_assert_eq!(r.get::<MaxRedirects>(), MaxRedirects::default());
	}
}
