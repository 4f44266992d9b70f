use std::fmt;

use crate::nav::options::NIL_MARKER;
use crate::nav::pretty::pretty_print_items;
use crate::nav::{NavOptions, Raw, Value};

/// Confirmed ordered sequence reached at `path`.
#[derive(Clone)]
pub struct ArrayView<'a> {
	items: &'a [Raw],
	path: String,
	options: NavOptions,
}

impl<'a> ArrayView<'a> {
	/// Wrap a sequence reached at `path`.
	pub fn new(items: &'a [Raw], path: impl Into<String>, options: NavOptions) -> Self {
		Self {
			items,
			path: path.into(),
			options,
		}
	}

	/// Element at `index`; absent when out of bounds.
	pub fn at(&self, index: usize) -> Value<'a> {
		Value::with_path(self.items.get(index), format!("{}[{index}]", self.path), self.options)
	}

	/// Elements in order, with `[index]` paths.
	pub fn iter(&self) -> impl Iterator<Item = Value<'a>> + '_ {
		self.items
			.iter()
			.enumerate()
			.map(|(index, raw)| Value::with_path(Some(raw), format!("{}[{index}]", self.path), self.options))
	}

	/// Stored sequence.
	pub fn raw(&self) -> &'a [Raw] {
		self.items
	}

	/// Path of the sequence in the original tree.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Always `true`: the sequence is confirmed.
	pub fn exists(&self) -> bool {
		true
	}

	/// Number of elements.
	pub fn count(&self) -> usize {
		self.items.len()
	}

	/// Whether the sequence has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Indented textual representation; `indent` prefixes nested lines, `unit` is added per level.
	pub fn pretty_print(&self, indent: &str, unit: &str) -> String {
		pretty_print_items(self.items, indent, unit)
	}
}

impl fmt::Debug for ArrayView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pretty_print("", "  "))
	}
}

/// Result of viewing a value as a sequence; navigation through a failed view yields absent values.
#[derive(Clone)]
pub struct OptionalArrayView<'a> {
	inner: Option<ArrayView<'a>>,
	path: String,
	options: NavOptions,
}

impl<'a> OptionalArrayView<'a> {
	/// Wrap the outcome of an array conversion attempted at `path`.
	pub fn new(inner: Option<ArrayView<'a>>, path: impl Into<String>, options: NavOptions) -> Self {
		Self {
			inner,
			path: path.into(),
			options,
		}
	}

	/// Element at `index`, or an absent value behind a `<nil>` marker.
	pub fn at(&self, index: usize) -> Value<'a> {
		match &self.inner {
			Some(view) => view.at(index),
			None => Value::with_path(None, format!("{}{NIL_MARKER}[{index}]", self.path), self.options),
		}
	}

	/// Confirmed view, if the conversion succeeded.
	pub fn view(&self) -> Option<&ArrayView<'a>> {
		self.inner.as_ref()
	}

	/// Whether the conversion succeeded.
	pub fn exists(&self) -> bool {
		self.inner.is_some()
	}

	/// Stored sequence, if any.
	pub fn raw(&self) -> Option<&'a [Raw]> {
		self.inner.as_ref().map(ArrayView::raw)
	}

	/// Path of the attempted conversion.
	pub fn path(&self) -> &str {
		&self.path
	}
}

impl fmt::Debug for OptionalArrayView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.inner {
			Some(view) => fmt::Debug::fmt(view, f),
			None => f.write_str("nil"),
		}
	}
}
