use rstest::rstest;

use super::*;

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case(" 7 ", 7)]
#[case("0x10", 16)]
#[case("0XfF", 255)]
#[case("max", u64::MAX)]
#[case("Unlimited", u64::MAX)]
#[case("18446744073709551615", u64::MAX)]
fn parse_size_accepts(#[case] input: &str, #[case] expected: u64) {
	assert_eq!(parse_size(input), Ok(expected));
}

#[rstest]
#[case("")]
#[case("-1")]
#[case("ten")]
#[case("0x")]
#[case("+5")]
#[case("0x+1")]
#[case("0x-1")]
#[case("18446744073709551616")]
fn parse_size_rejects(#[case] input: &str) {
	assert_eq!(parse_size(input), Err(format!("invalid size: '{input}'")));
}

#[test]
fn text_is_verbatim() {
	assert_eq!(
		parse_value_for_shape("  spaced  ", ValueShape::Text),
		Ok(TaggedValue::from("  spaced  "))
	);
}

#[test]
fn parse_value_uses_declared_shape() {
	let catalog = Catalog::from_inventory().unwrap();
	assert_eq!(parse_value(&catalog, "redirects", "3"), Ok(TaggedValue::Size(3)));
	assert_eq!(parse_value(&catalog, "method", "3"), Ok(TaggedValue::from("3")));
}

#[test]
fn parse_value_reports_errors() {
	let catalog = Catalog::from_inventory().unwrap();
	assert_eq!(
		parse_value(&catalog, "redirects", "many"),
		Err(OptionError::InvalidValue {
			option: "redirects".to_string(),
			reason: "invalid size: 'many'".to_string(),
		})
	);
	assert!(matches!(
		parse_value(&catalog, "method", ""),
		Err(OptionError::InvalidValue { .. })
	));
	assert!(matches!(
		parse_value(&catalog, "nope", "1"),
		Err(OptionError::UnknownOption { .. })
	));
}
