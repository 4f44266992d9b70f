use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use url::Url;

use crate::nav::{JjError, NavOptions, Raw, Result, Value, format_rfc3339};

/// Read side of an external keyed archive.
///
/// Scalar decoders return the facility's zero value for missing or mismatched
/// entries, the way keyed coders do. [`Decoder`] reads entries through
/// [`ArchiveReader::decode_object`] and layers the usual tiers on top.
pub trait ArchiveReader {
	/// Entry stored under `key`.
	fn decode_object(&self, key: &str) -> Option<&Raw>;

	/// Whether anything is stored under `key`.
	fn contains_key(&self, key: &str) -> bool {
		self.decode_object(key).is_some()
	}

	/// String stored under `key`.
	fn decode_string(&self, key: &str) -> Option<&str> {
		match self.decode_object(key) {
			Some(Raw::String(v)) => Some(v.as_str()),
			_ => None,
		}
	}

	/// 32-bit integer stored under `key`, `0` otherwise.
	fn decode_i32(&self, key: &str) -> i32 {
		match self.decode_object(key) {
			Some(Raw::Int(v)) => i32::try_from(*v).unwrap_or_default(),
			_ => 0,
		}
	}

	/// Boolean stored under `key`, `false` otherwise.
	fn decode_bool(&self, key: &str) -> bool {
		matches!(self.decode_object(key), Some(Raw::Bool(true)))
	}

	/// Float stored under `key`, `0.0` otherwise.
	fn decode_f32(&self, key: &str) -> f32 {
		match self.decode_object(key) {
			Some(Raw::Float(v)) => *v,
			_ => 0.0,
		}
	}

	/// Double stored under `key`, `0.0` otherwise.
	fn decode_f64(&self, key: &str) -> f64 {
		match self.decode_object(key) {
			Some(Raw::Double(v)) => *v,
			_ => 0.0,
		}
	}
}

/// Write side of an external keyed archive.
pub trait ArchiveWriter {
	/// Store `value` under `key`, replacing any previous entry.
	fn encode_object(&mut self, key: &str, value: Raw);

	/// Store a 32-bit integer.
	fn encode_i32(&mut self, key: &str, value: i32) {
		self.encode_object(key, Raw::Int(i64::from(value)));
	}

	/// Store a boolean.
	fn encode_bool(&mut self, key: &str, value: bool) {
		self.encode_object(key, Raw::Bool(value));
	}

	/// Store a float.
	fn encode_f32(&mut self, key: &str, value: f32) {
		self.encode_object(key, Raw::Float(value));
	}

	/// Store a double.
	fn encode_f64(&mut self, key: &str, value: f64) {
		self.encode_object(key, Raw::Double(value));
	}
}

/// Type that can be written to and restored from a keyed archive.
pub trait Archivable: Sized {
	/// Name reported when a stored entry cannot be decoded as this type.
	const TYPE_NAME: &'static str;

	/// Write every field through `enc`.
	fn encode(&self, enc: &mut Encoder<'_>);

	/// Restore from the fields readable through `dec`.
	fn decode(dec: &Decoder<'_>) -> Result<Self>;
}

/// In-memory keyed archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyedArchive {
	entries: BTreeMap<String, Raw>,
}

impl KeyedArchive {
	/// Empty archive.
	pub fn new() -> Self {
		Self::default()
	}

	/// Archive over existing entries.
	pub fn from_entries(entries: BTreeMap<String, Raw>) -> Self {
		Self { entries }
	}

	/// Archive over a decoded JSON object; `None` for any other JSON value.
	pub fn from_json(value: serde_json::Value) -> Option<Self> {
		match Raw::from(value) {
			Raw::Object(entries) => Some(Self { entries }),
			_ => None,
		}
	}

	/// Stored entries.
	pub fn entries(&self) -> &BTreeMap<String, Raw> {
		&self.entries
	}

	/// Consume the archive into a raw object node.
	pub fn into_raw(self) -> Raw {
		Raw::Object(self.entries)
	}
}

impl ArchiveReader for KeyedArchive {
	fn decode_object(&self, key: &str) -> Option<&Raw> {
		self.entries.get(key)
	}
}

impl ArchiveWriter for KeyedArchive {
	fn encode_object(&mut self, key: &str, value: Raw) {
		self.entries.insert(key.to_owned(), value);
	}
}

/// Wrap an archive reader for keyed decoding.
pub fn jj_decoder(reader: &dyn ArchiveReader) -> Decoder<'_> {
	Decoder::new(reader)
}

/// Wrap an archive writer for keyed encoding.
pub fn jj_encoder(writer: &mut dyn ArchiveWriter) -> Encoder<'_> {
	Encoder::new(writer)
}

/// Typed writes into an [`ArchiveWriter`].
pub struct Encoder<'w> {
	writer: &'w mut dyn ArchiveWriter,
}

impl<'w> Encoder<'w> {
	/// Wrap `writer`.
	pub fn new(writer: &'w mut dyn ArchiveWriter) -> Self {
		Self { writer }
	}

	/// Put a 32-bit integer.
	pub fn put_int(&mut self, value: i32, at: &str) {
		self.writer.encode_i32(at, value);
	}

	/// Put a boolean.
	pub fn put_bool(&mut self, value: bool, at: &str) {
		self.writer.encode_bool(at, value);
	}

	/// Put a float.
	pub fn put_float(&mut self, value: f32, at: &str) {
		self.writer.encode_f32(at, value);
	}

	/// Put a double.
	pub fn put_double(&mut self, value: f64, at: &str) {
		self.writer.encode_f64(at, value);
	}

	/// Put any raw-convertible value; `None` stores an explicit null.
	pub fn put(&mut self, value: impl Into<Raw>, at: &str) {
		self.writer.encode_object(at, value.into());
	}

	/// Put a date as an RFC 3339 string.
	pub fn put_date(&mut self, value: &DateTime<Utc>, at: &str) {
		self.writer.encode_object(at, Raw::String(format_rfc3339(value)));
	}

	/// Put a URL as its serialized string.
	pub fn put_url(&mut self, value: &Url, at: &str) {
		self.writer.encode_object(at, Raw::from(value.as_str()));
	}

	/// Put a time zone as its IANA name.
	pub fn put_time_zone(&mut self, value: Tz, at: &str) {
		self.writer.encode_object(at, Raw::from(value.name()));
	}

	/// Put a nested archivable object.
	pub fn put_object<T: Archivable>(&mut self, value: &T, at: &str) {
		let mut nested = KeyedArchive::new();
		value.encode(&mut Encoder::new(&mut nested));
		self.writer.encode_object(at, nested.into_raw());
	}
}

/// Keyed reads from an [`ArchiveReader`].
#[derive(Clone, Copy)]
pub struct Decoder<'r> {
	reader: &'r dyn ArchiveReader,
}

impl<'r> Decoder<'r> {
	/// Wrap `reader`.
	pub fn new(reader: &'r dyn ArchiveReader) -> Self {
		Self { reader }
	}

	/// Entry handle for `key`.
	pub fn at(&self, key: &str) -> DecodedValue<'r> {
		DecodedValue {
			reader: self.reader,
			key: key.to_owned(),
		}
	}

	/// Underlying reader.
	pub fn reader(&self) -> &'r dyn ArchiveReader {
		self.reader
	}
}

/// One keyed archive entry with the same accessor tiers as [`Value`].
///
/// Error paths are the bare key: archives are flat per object.
pub struct DecodedValue<'r> {
	reader: &'r dyn ArchiveReader,
	key: String,
}

impl<'r> DecodedValue<'r> {
	/// Entry as a navigable value rooted at the key.
	pub fn value(&self) -> Value<'r> {
		Value::with_path(self.reader.decode_object(&self.key), self.key.clone(), NavOptions::quiet())
	}

	/// Key of the entry.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Whether anything is stored under the key.
	pub fn exists(&self) -> bool {
		self.reader.contains_key(&self.key)
	}

	/// Stored string.
	pub fn as_string(&self) -> Option<&'r str> {
		self.reader.decode_string(&self.key)
	}

	/// Stored string, or `default()`.
	pub fn to_string(&self, default: impl FnOnce() -> String) -> String {
		self.as_string().map_or_else(default, str::to_owned)
	}

	/// Stored string; fails with [`JjError::WrongType`] otherwise.
	pub fn string(&self) -> Result<&'r str> {
		self.value().string()
	}

	/// Stored integer.
	pub fn as_int(&self) -> Option<i64> {
		self.value().as_int()
	}

	/// Stored integer, or `default()`.
	pub fn to_int(&self, default: impl FnOnce() -> i64) -> i64 {
		self.as_int().unwrap_or_else(default)
	}

	/// Stored integer; fails with [`JjError::WrongType`] otherwise.
	pub fn int(&self) -> Result<i64> {
		self.value().int()
	}

	/// Stored boolean.
	pub fn as_bool(&self) -> Option<bool> {
		self.value().as_bool()
	}

	/// Stored boolean, or `default()`.
	pub fn to_bool(&self, default: impl FnOnce() -> bool) -> bool {
		self.as_bool().unwrap_or_else(default)
	}

	/// Stored boolean; fails with [`JjError::WrongType`] otherwise.
	pub fn bool(&self) -> Result<bool> {
		self.value().bool()
	}

	/// Stored float.
	pub fn as_float(&self) -> Option<f32> {
		self.value().as_float()
	}

	/// Stored float, or `default()`.
	pub fn to_float(&self, default: impl FnOnce() -> f32) -> f32 {
		self.as_float().unwrap_or_else(default)
	}

	/// Stored float; fails with [`JjError::WrongType`] otherwise.
	pub fn float(&self) -> Result<f32> {
		self.value().float()
	}

	/// Stored double.
	pub fn as_double(&self) -> Option<f64> {
		self.value().as_double()
	}

	/// Stored double, or `default()`.
	pub fn to_double(&self, default: impl FnOnce() -> f64) -> f64 {
		self.as_double().unwrap_or_else(default)
	}

	/// Stored double; fails with [`JjError::WrongType`] otherwise.
	pub fn double(&self) -> Result<f64> {
		self.value().double()
	}

	/// Stored RFC 3339 date.
	pub fn as_date(&self) -> Option<DateTime<Utc>> {
		self.value().as_date()
	}

	/// Stored date; fails with [`JjError::WrongType`] otherwise.
	pub fn date(&self) -> Result<DateTime<Utc>> {
		self.value().date()
	}

	/// Stored URL.
	pub fn as_url(&self) -> Option<Url> {
		self.value().as_url()
	}

	/// Stored URL; fails with [`JjError::WrongType`] otherwise.
	pub fn url(&self) -> Result<Url> {
		self.value().url()
	}

	/// Stored time zone.
	pub fn as_time_zone(&self) -> Option<Tz> {
		self.value().as_time_zone()
	}

	/// Stored time zone; fails with [`JjError::WrongType`] otherwise.
	pub fn time_zone(&self) -> Result<Tz> {
		self.value().time_zone()
	}

	/// Nested archivable object; `None` when missing or undecodable.
	pub fn decode_as<T: Archivable>(&self) -> Option<T> {
		self.decode().ok()
	}

	/// Nested archivable object; fails with [`JjError::WrongType`] naming `T::TYPE_NAME`.
	pub fn decode<T: Archivable>(&self) -> Result<T> {
		let stored = self.reader.decode_object(&self.key);
		let Some(Raw::Object(entries)) = stored else {
			return Err(JjError::wrong_type(stored, &self.key, T::TYPE_NAME));
		};

		let nested = KeyedArchive::from_entries(entries.clone());
		T::decode(&Decoder::new(&nested)).map_err(|_| JjError::wrong_type(stored, &self.key, T::TYPE_NAME))
	}
}

#[cfg(test)]
mod tests;
