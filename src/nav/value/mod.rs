use std::fmt;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use url::Url;

use crate::nav::options::ROOT_PATH;
use crate::nav::pretty::pretty_print_opt;
use crate::nav::{
	ArrayView, FieldPath, Index, JjError, NavOptions, Number, ObjectView, OptionalArrayView, OptionalObjectView, PathStep, Raw, Result, parse_rfc3339,
};

/// Target type name reported when an object conversion fails.
pub const OBJECT_TYPE_NAME: &str = "[String: Any]";
/// Target type name reported when an array conversion fails.
pub const ARRAY_TYPE_NAME: &str = "[Any]";

/// Wrap a decoded tree as a navigable root value with default options.
pub fn jj(raw: &Raw) -> Value<'_> {
	Value::new(Some(raw))
}

/// Wrap a decoded tree as a navigable root value.
pub fn jj_with(raw: &Raw, options: NavOptions) -> Value<'_> {
	Value::with_path(Some(raw), ROOT_PATH, options)
}

// Generates the defaulted and strict tiers on top of an `as_*` accessor.
macro_rules! tiers {
	($as_fn:ident, $to_fn:ident, $strict_fn:ident, $ty:ty, $name:literal) => {
		#[doc = concat!("Value as `", $name, "`, or `default()` when it is absent or has another type.")]
		pub fn $to_fn(&self, default: impl FnOnce() -> $ty) -> $ty {
			self.$as_fn().unwrap_or_else(default)
		}

		#[doc = concat!("Value as `", $name, "`; fails with [`JjError::WrongType`] when it is absent or has another type.")]
		pub fn $strict_fn(&self) -> Result<$ty> {
			self.$as_fn().ok_or_else(|| self.wrong_type($name))
		}
	};
}

/// One node of a decoded tree plus the path used to reach it.
///
/// The node may be absent: navigation never fails, it degrades to an absent
/// value whose path still records every step taken. Conversions come in three
/// tiers per type: `as_*` (lenient, `Option`), `to_*` (defaulted) and the bare
/// name (strict, `Result`).
#[derive(Clone)]
pub struct Value<'a> {
	raw: Option<&'a Raw>,
	path: String,
	options: NavOptions,
}

impl<'a> Value<'a> {
	/// Wrap an optional node at the root path with default options.
	pub fn new(raw: Option<&'a Raw>) -> Self {
		Self::with_path(raw, ROOT_PATH, NavOptions::default())
	}

	/// Wrap an optional node reached at `path`.
	pub fn with_path(raw: Option<&'a Raw>, path: impl Into<String>, options: NavOptions) -> Self {
		Self {
			raw,
			path: path.into(),
			options,
		}
	}

	/// Stored node, if any.
	pub fn raw(&self) -> Option<&'a Raw> {
		self.raw
	}

	/// Path of the node in the original tree.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Options inherited by every value derived from this one.
	pub fn options(&self) -> NavOptions {
		self.options
	}

	/// Whether a node is stored at the path (an explicit null counts as stored).
	pub fn exists(&self) -> bool {
		self.raw.is_some()
	}

	/// Whether the stored node is the explicit null marker.
	pub fn is_null(&self) -> bool {
		matches!(self.raw, Some(Raw::Null))
	}

	/// Stored node; fails with [`JjError::NotFound`] when nothing is stored.
	pub fn require(&self) -> Result<&'a Raw> {
		self.raw.ok_or_else(|| JjError::NotFound { path: self.path.clone() })
	}

	/// Stored boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self.raw {
			Some(Raw::Bool(v)) => Some(*v),
			_ => None,
		}
	}

	tiers!(as_bool, to_bool, bool, bool, "Bool");

	/// Stored signed integer; unsigned and floating nodes do not qualify.
	pub fn as_int(&self) -> Option<i64> {
		match self.raw {
			Some(Raw::Int(v)) => Some(*v),
			_ => None,
		}
	}

	tiers!(as_int, to_int, int, i64, "Int");

	/// Accepts unsigned integers and non-negative signed integers.
	pub fn as_uint(&self) -> Option<u64> {
		match self.raw {
			Some(Raw::UInt(v)) => Some(*v),
			Some(Raw::Int(v)) => u64::try_from(*v).ok(),
			_ => None,
		}
	}

	tiers!(as_uint, to_uint, uint, u64, "UInt");

	/// Any numeric node, keeping its stored representation.
	pub fn as_number(&self) -> Option<Number> {
		match self.raw {
			Some(Raw::Int(v)) => Some(Number::Int(*v)),
			Some(Raw::UInt(v)) => Some(Number::UInt(*v)),
			Some(Raw::Float(v)) => Some(Number::Float(*v)),
			Some(Raw::Double(v)) => Some(Number::Double(*v)),
			_ => None,
		}
	}

	tiers!(as_number, to_number, number, Number, "Number");

	/// Stored single-precision float.
	pub fn as_float(&self) -> Option<f32> {
		match self.raw {
			Some(Raw::Float(v)) => Some(*v),
			_ => None,
		}
	}

	tiers!(as_float, to_float, float, f32, "Float");

	/// Stored double-precision float.
	pub fn as_double(&self) -> Option<f64> {
		match self.raw {
			Some(Raw::Double(v)) => Some(*v),
			_ => None,
		}
	}

	tiers!(as_double, to_double, double, f64, "Double");

	/// Stored string.
	pub fn as_string(&self) -> Option<&'a str> {
		match self.raw {
			Some(Raw::String(v)) => Some(v.as_str()),
			_ => None,
		}
	}

	/// Owned string, or `default()` when the value is absent or not a string.
	pub fn to_string(&self, default: impl FnOnce() -> String) -> String {
		self.as_string().map_or_else(default, str::to_owned)
	}

	/// Borrowed string; fails with [`JjError::WrongType`] otherwise.
	pub fn string(&self) -> Result<&'a str> {
		self.as_string().ok_or_else(|| self.wrong_type("String"))
	}

	/// String parsed as a `yyyy-MM-ddTHH:mm:ss.SSSZ` UTC timestamp.
	pub fn as_date(&self) -> Option<DateTime<Utc>> {
		self.as_string().and_then(parse_rfc3339)
	}

	tiers!(as_date, to_date, date, DateTime<Utc>, "Date");

	/// String parsed as an absolute URL.
	pub fn as_url(&self) -> Option<Url> {
		self.as_string().and_then(|s| Url::parse(s).ok())
	}

	tiers!(as_url, to_url, url, Url, "URL");

	/// String looked up as an IANA time zone name.
	pub fn as_time_zone(&self) -> Option<Tz> {
		self.as_string().and_then(|s| s.parse::<Tz>().ok())
	}

	tiers!(as_time_zone, to_time_zone, time_zone, Tz, "TimeZone");

	/// Confirmed object view.
	pub fn as_obj(&self) -> Option<ObjectView<'a>> {
		match self.raw {
			Some(Raw::Object(entries)) => Some(ObjectView::new(entries, self.path.clone(), self.options)),
			_ => None,
		}
	}

	/// Attempted object view; navigation through it never fails.
	pub fn to_obj(&self) -> OptionalObjectView<'a> {
		OptionalObjectView::new(self.as_obj(), self.path.clone(), self.options)
	}

	/// Object view; fails with [`JjError::WrongType`] otherwise.
	pub fn obj(&self) -> Result<ObjectView<'a>> {
		self.as_obj().ok_or_else(|| self.wrong_type(OBJECT_TYPE_NAME))
	}

	/// Confirmed array view.
	pub fn as_arr(&self) -> Option<ArrayView<'a>> {
		match self.raw {
			Some(Raw::Array(items)) => Some(ArrayView::new(items, self.path.clone(), self.options)),
			_ => None,
		}
	}

	/// Attempted array view; navigation through it never fails.
	pub fn to_arr(&self) -> OptionalArrayView<'a> {
		OptionalArrayView::new(self.as_arr(), self.path.clone(), self.options)
	}

	/// Array view; fails with [`JjError::WrongType`] otherwise.
	pub fn arr(&self) -> Result<ArrayView<'a>> {
		self.as_arr().ok_or_else(|| self.wrong_type(ARRAY_TYPE_NAME))
	}

	/// Child by key (`&str`, `String`) or by index (`usize`).
	///
	/// ```
	/// use jj::nav::{Raw, jj};
	///
	/// let raw = Raw::from(serde_json::json!({"items": [{"name": "a"}]}));
	/// assert_eq!(jj(&raw).at("items").at(0).at("name").string().unwrap(), "a");
	/// assert_eq!(jj(&raw).at("missing").at(3).path(), "<root>.missing<nil>[3]");
	/// ```
	pub fn at<I: Index>(&self, index: I) -> Value<'a> {
		index.index_into(self)
	}

	/// Apply every step of `path` in order, as chained [`Value::at`] calls would.
	pub fn at_path(&self, path: &FieldPath) -> Value<'a> {
		let mut current = self.clone();
		for step in &path.steps {
			current = match step {
				PathStep::Key(key) => current.at(key.as_str()),
				PathStep::Index(index) => current.at(*index),
			};
		}
		current
	}

	/// Parse `path` (`a.b[0].c`) and navigate along it.
	pub fn pointer(&self, path: &str) -> Result<Value<'a>> {
		Ok(self.at_path(&FieldPath::parse(path)?))
	}

	/// Indented textual representation; absent renders as `nil`.
	pub fn pretty_print(&self, indent: &str, unit: &str) -> String {
		pretty_print_opt(self.raw, indent, unit)
	}

	fn wrong_type(&self, to_type: &'static str) -> JjError {
		JjError::wrong_type(self.raw, &self.path, to_type)
	}
}

impl fmt::Debug for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pretty_print("", "  "))
	}
}
