use std::path::PathBuf;

use jj::nav::{Raw, Value, format_rfc3339, jj};

use crate::cmd::Result;
use crate::cmd::util::{load_document, nav_options, select};

/// Conversion target accepted by `--as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
	Bool,
	Int,
	Uint,
	Number,
	Float,
	Double,
	String,
	Date,
	Url,
	TimeZone,
	Object,
	Array,
}

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(value_name = "PATH")]
	pub path_expr: String,
	#[arg(long = "as", value_enum)]
	pub target: Target,
	#[arg(long)]
	pub lenient: bool,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "no-deprecation-warnings")]
	pub no_deprecation_warnings: bool,
}

/// Convert the node at a field path and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		path_expr,
		target,
		lenient,
		json,
		no_deprecation_warnings,
	} = args;

	let root = load_document(&file)?;
	let value = select(&root, Some(&path_expr), nav_options(no_deprecation_warnings))?;

	let converted = match convert(&value, target) {
		Ok(raw) => Some(raw),
		Err(err) if lenient => {
			tracing::debug!(path = value.path(), error = %err, "lenient conversion fell back to nil");
			None
		}
		Err(err) => return Err(err.into()),
	};

	if json {
		let out = serde_json::json!({
			"path": value.path(),
			"exists": value.exists(),
			"value": serde_json::to_value(&converted)?,
		});
		println!("{}", serde_json::to_string_pretty(&out)?);
		return Ok(());
	}

	println!("{}", render_text(converted.as_ref()));
	Ok(())
}

/// Strictly convert `value`, re-encoding the result as a raw node.
pub(crate) fn convert(value: &Value<'_>, target: Target) -> jj::nav::Result<Raw> {
	Ok(match target {
		Target::Bool => Raw::Bool(value.bool()?),
		Target::Int => Raw::Int(value.int()?),
		Target::Uint => Raw::UInt(value.uint()?),
		Target::Number => Raw::from(value.number()?),
		Target::Float => Raw::Float(value.float()?),
		Target::Double => Raw::Double(value.double()?),
		Target::String => Raw::from(value.string()?),
		Target::Date => Raw::String(format_rfc3339(&value.date()?)),
		Target::Url => Raw::from(value.url()?.as_str()),
		Target::TimeZone => Raw::from(value.time_zone()?.name()),
		Target::Object => Raw::Object(value.obj()?.raw().clone()),
		Target::Array => Raw::Array(value.arr()?.raw().to_vec()),
	})
}

fn render_text(converted: Option<&Raw>) -> String {
	match converted {
		Some(Raw::String(s)) => s.clone(),
		Some(raw) => jj(raw).pretty_print("", "  "),
		None => "nil".to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use jj::nav::{JjError, Raw, jj};
	use serde_json::json;

	use super::{Target, convert, render_text};

	#[test]
	fn converts_each_target() {
		let raw = Raw::from(json!({
			"flag": true,
			"count": 3,
			"ratio": 0.5,
			"when": "2016-05-27T10:20:30.123Z",
			"site": "https://example.com",
			"zone": "UTC",
			"list": [1],
			"map": {"k": "v"}
		}));
		let value = jj(&raw);

		assert_eq!(convert(&value.at("flag"), Target::Bool).expect("bool"), Raw::Bool(true));
		assert_eq!(convert(&value.at("count"), Target::Uint).expect("uint"), Raw::UInt(3));
		assert_eq!(convert(&value.at("count"), Target::Number).expect("number"), Raw::Int(3));
		assert_eq!(convert(&value.at("ratio"), Target::Double).expect("double"), Raw::Double(0.5));
		assert_eq!(convert(&value.at("when"), Target::Date).expect("date"), Raw::from("2016-05-27T10:20:30.123Z"));
		assert_eq!(convert(&value.at("site"), Target::Url).expect("url"), Raw::from("https://example.com/"));
		assert_eq!(convert(&value.at("zone"), Target::TimeZone).expect("zone"), Raw::from("UTC"));
		assert_eq!(convert(&value.at("list"), Target::Array).expect("array"), Raw::array([1]));
		assert_eq!(convert(&value.at("map"), Target::Object).expect("object"), Raw::object([("k", "v")]));
	}

	#[test]
	fn conversion_failure_keeps_path() {
		let raw = Raw::from(json!({"count": 3}));
		let err = convert(&jj(&raw).at("count"), Target::String).expect_err("int is not a string");
		assert!(matches!(err, JjError::WrongType { ref path, to_type: "String", .. } if path == "<root>.count"));
	}

	#[test]
	fn text_rendering_unquotes_strings() {
		assert_eq!(render_text(Some(&Raw::from("plain"))), "plain");
		assert_eq!(render_text(Some(&Raw::Int(4))), "4");
		assert_eq!(render_text(None), "nil");
	}
}
