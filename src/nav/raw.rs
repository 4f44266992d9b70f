use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// One decoded node of a dynamic tree.
///
/// Produced by an external decoder (see the `From<serde_json::Value>` impl) and
/// never mutated by navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
	/// Explicit null marker, distinct from an absent value.
	Null,
	/// Boolean leaf.
	Bool(bool),
	/// Signed integer leaf.
	Int(i64),
	/// Unsigned integer leaf.
	UInt(u64),
	/// Single-precision float leaf.
	Float(f32),
	/// Double-precision float leaf.
	Double(f64),
	/// String leaf.
	String(String),
	/// Ordered sequence.
	Array(Vec<Raw>),
	/// String-keyed mapping, iterated in key order.
	Object(BTreeMap<String, Raw>),
}

impl Raw {
	/// Stable label of the node kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "Null",
			Self::Bool(_) => "Bool",
			Self::Int(_) => "Int",
			Self::UInt(_) => "UInt",
			Self::Float(_) => "Float",
			Self::Double(_) => "Double",
			Self::String(_) => "String",
			Self::Array(_) => "Array",
			Self::Object(_) => "Object",
		}
	}

	/// Build an object node from key/value pairs.
	pub fn object<K, V, I>(entries: I) -> Self
	where
		K: Into<String>,
		V: Into<Raw>,
		I: IntoIterator<Item = (K, V)>,
	{
		Self::Object(entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}

	/// Build an array node from items.
	pub fn array<V, I>(items: I) -> Self
	where
		V: Into<Raw>,
		I: IntoIterator<Item = V>,
	{
		Self::Array(items.into_iter().map(Into::into).collect())
	}
}

/// Any numeric leaf, without coercion between representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	UInt(u64),
	/// Single-precision float.
	Float(f32),
	/// Double-precision float.
	Double(f64),
}

impl Number {
	/// Lossy conversion to `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Int(v) => v as f64,
			Self::UInt(v) => v as f64,
			Self::Float(v) => f64::from(v),
			Self::Double(v) => v,
		}
	}
}

impl Default for Number {
	fn default() -> Self {
		Self::Int(0)
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v) => write!(f, "{v}"),
			Self::UInt(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
		}
	}
}

impl From<Number> for Raw {
	fn from(value: Number) -> Self {
		match value {
			Number::Int(v) => Self::Int(v),
			Number::UInt(v) => Self::UInt(v),
			Number::Float(v) => Self::Float(v),
			Number::Double(v) => Self::Double(v),
		}
	}
}

impl From<bool> for Raw {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Raw {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for Raw {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for Raw {
	fn from(value: u32) -> Self {
		Self::UInt(u64::from(value))
	}
}

impl From<u64> for Raw {
	fn from(value: u64) -> Self {
		Self::UInt(value)
	}
}

impl From<f32> for Raw {
	fn from(value: f32) -> Self {
		Self::Float(value)
	}
}

impl From<f64> for Raw {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<&str> for Raw {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Raw {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl<T: Into<Raw>> From<Vec<T>> for Raw {
	fn from(value: Vec<T>) -> Self {
		Self::array(value)
	}
}

impl From<BTreeMap<String, Raw>> for Raw {
	fn from(value: BTreeMap<String, Raw>) -> Self {
		Self::Object(value)
	}
}

impl<T: Into<Raw>> From<Option<T>> for Raw {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<serde_json::Value> for Raw {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(v) => Self::Bool(v),
			serde_json::Value::Number(n) => {
				if let Some(v) = n.as_i64() {
					Self::Int(v)
				} else if let Some(v) = n.as_u64() {
					Self::UInt(v)
				} else {
					Self::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(v) => Self::String(v),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

impl Serialize for Raw {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::Int(v) => serializer.serialize_i64(*v),
			Self::UInt(v) => serializer.serialize_u64(*v),
			Self::Float(v) => serializer.serialize_f32(*v),
			Self::Double(v) => serializer.serialize_f64(*v),
			Self::String(v) => serializer.serialize_str(v),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, value) in entries {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
		}
	}
}
