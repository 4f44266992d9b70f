use std::collections::BTreeMap;

use crate::nav::Raw;

/// Render an optional raw node; absent renders as `nil`.
pub(crate) fn pretty_print_opt(raw: Option<&Raw>, indent: &str, unit: &str) -> String {
	match raw {
		Some(raw) => pretty_print_raw(raw, indent, unit),
		None => "nil".to_owned(),
	}
}

/// Render one raw node as indented text.
pub(crate) fn pretty_print_raw(raw: &Raw, indent: &str, unit: &str) -> String {
	match raw {
		Raw::Array(items) => pretty_print_items(items, indent, unit),
		Raw::Object(entries) => pretty_print_entries(entries, indent, unit),
		Raw::String(v) => format!("\"{v}\""),
		Raw::Null => "null".to_owned(),
		Raw::Bool(v) => v.to_string(),
		Raw::Int(v) => v.to_string(),
		Raw::UInt(v) => v.to_string(),
		Raw::Float(v) => v.to_string(),
		Raw::Double(v) => v.to_string(),
	}
}

pub(crate) fn pretty_print_items(items: &[Raw], indent: &str, unit: &str) -> String {
	if items.is_empty() {
		return "[]".to_owned();
	}

	let next = format!("{indent}{unit}");
	let mut out = "[\n".to_owned();
	for item in items {
		out.push_str(&next);
		out.push_str(&pretty_print_raw(item, &next, unit));
		out.push_str(",\n");
	}
	strip_trailing_comma(&mut out);
	out.push_str(indent);
	out.push(']');
	out
}

pub(crate) fn pretty_print_entries(entries: &BTreeMap<String, Raw>, indent: &str, unit: &str) -> String {
	if entries.is_empty() {
		return "{}".to_owned();
	}

	let next = format!("{indent}{unit}");
	let mut out = "{\n".to_owned();
	for (key, value) in entries {
		out.push_str(&format!("{next}\"{key}\": {},\n", pretty_print_raw(value, &next, unit)));
	}
	strip_trailing_comma(&mut out);
	out.push_str(indent);
	out.push('}');
	out
}

// Turns the final ",\n" into "\n".
fn strip_trailing_comma(out: &mut String) {
	if out.ends_with(",\n") {
		out.truncate(out.len() - 2);
		out.push('\n');
	}
}
