use thiserror::Error;

use crate::nav::Raw;
use crate::nav::pretty::pretty_print_raw;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JjError>;

/// Errors produced by strict accessors and path parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JjError {
	/// Value was absent or could not be represented as the requested type.
	#[error("JJError.WrongType: Can't convert {} at path: '{path}' to type '{to_type}'", describe(.value.as_ref()))]
	WrongType {
		/// Offending raw value, `None` when nothing was stored at the path.
		value: Option<Raw>,
		/// Fully-qualified path at the point of failure.
		path: String,
		/// Requested target type name.
		to_type: &'static str,
	},
	/// Nothing is stored at the path.
	#[error("JJError.NotFound: No object at path: '{path}'")]
	NotFound {
		/// Fully-qualified path that was looked up.
		path: String,
	},
	/// Field path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
}

impl JjError {
	pub(crate) fn wrong_type(value: Option<&Raw>, path: &str, to_type: &'static str) -> Self {
		Self::WrongType {
			value: value.cloned(),
			path: path.to_owned(),
			to_type,
		}
	}

	/// Path the error refers to, if any.
	pub fn path(&self) -> &str {
		match self {
			Self::WrongType { path, .. } | Self::NotFound { path } | Self::InvalidFieldPath { path } => path,
		}
	}
}

fn describe(value: Option<&Raw>) -> String {
	match value {
		Some(raw) => pretty_print_raw(raw, "", "  "),
		None => "nil".to_owned(),
	}
}
