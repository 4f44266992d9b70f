use std::collections::BTreeMap;
use std::fmt;

use crate::nav::options::NIL_MARKER;
use crate::nav::pretty::pretty_print_entries;
use crate::nav::{NavOptions, Raw, Value};

/// Confirmed string-keyed mapping reached at `path`.
#[derive(Clone)]
pub struct ObjectView<'a> {
	entries: &'a BTreeMap<String, Raw>,
	path: String,
	options: NavOptions,
}

impl<'a> ObjectView<'a> {
	/// Wrap a mapping reached at `path`.
	pub fn new(entries: &'a BTreeMap<String, Raw>, path: impl Into<String>, options: NavOptions) -> Self {
		Self {
			entries,
			path: path.into(),
			options,
		}
	}

	/// Child value stored under `key`; absent when the key is missing.
	pub fn at(&self, key: &str) -> Value<'a> {
		let path = format!("{}.{key}", self.path);
		if self.options.warn_deprecated
			&& let Some(note) = self.deprecation(key)
		{
			tracing::warn!(path = %path, note = %note.pretty_print("", "  "), "using deprecated field");
		}
		Value::with_path(self.entries.get(key), path, self.options)
	}

	/// Deprecation note stored under the `$<key>__deprecated` sibling, if any.
	pub fn deprecation(&self, key: &str) -> Option<Value<'a>> {
		let marker = format!("${key}__deprecated");
		let raw = self.entries.get(&marker)?;
		Some(Value::with_path(Some(raw), format!("{}.{marker}", self.path), self.options))
	}

	/// Keys in ascending order.
	pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
		self.entries.keys().map(String::as_str)
	}

	/// `(key, child)` pairs in key order; child paths are extended like [`ObjectView::at`].
	pub fn iter(&self) -> impl Iterator<Item = (&'a str, Value<'a>)> + '_ {
		self.entries
			.iter()
			.map(|(key, raw)| (key.as_str(), Value::with_path(Some(raw), format!("{}.{key}", self.path), self.options)))
	}

	/// Stored mapping.
	pub fn raw(&self) -> &'a BTreeMap<String, Raw> {
		self.entries
	}

	/// Path of the mapping in the original tree.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Always `true`: the mapping is confirmed.
	pub fn exists(&self) -> bool {
		true
	}

	/// Number of entries.
	pub fn count(&self) -> usize {
		self.entries.len()
	}

	/// Whether the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Indented textual representation; `indent` prefixes nested lines, `unit` is added per level.
	pub fn pretty_print(&self, indent: &str, unit: &str) -> String {
		pretty_print_entries(self.entries, indent, unit)
	}
}

impl fmt::Debug for ObjectView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pretty_print("", "  "))
	}
}

/// Result of viewing a value as a mapping; navigation through a failed view yields absent values.
#[derive(Clone)]
pub struct OptionalObjectView<'a> {
	inner: Option<ObjectView<'a>>,
	path: String,
	options: NavOptions,
}

impl<'a> OptionalObjectView<'a> {
	/// Wrap the outcome of an object conversion attempted at `path`.
	pub fn new(inner: Option<ObjectView<'a>>, path: impl Into<String>, options: NavOptions) -> Self {
		Self {
			inner,
			path: path.into(),
			options,
		}
	}

	/// Child value under `key`, or an absent value behind a `<nil>` marker.
	pub fn at(&self, key: &str) -> Value<'a> {
		match &self.inner {
			Some(view) => view.at(key),
			None => Value::with_path(None, format!("{}{NIL_MARKER}.{key}", self.path), self.options),
		}
	}

	/// Confirmed view, if the conversion succeeded.
	pub fn view(&self) -> Option<&ObjectView<'a>> {
		self.inner.as_ref()
	}

	/// Whether the conversion succeeded.
	pub fn exists(&self) -> bool {
		self.inner.is_some()
	}

	/// Stored mapping, if any.
	pub fn raw(&self) -> Option<&'a BTreeMap<String, Raw>> {
		self.inner.as_ref().map(ObjectView::raw)
	}

	/// Path of the attempted conversion.
	pub fn path(&self) -> &str {
		&self.path
	}
}

impl fmt::Debug for OptionalObjectView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.inner {
			Some(view) => fmt::Debug::fmt(view, f),
			None => f.write_str("nil"),
		}
	}
}
