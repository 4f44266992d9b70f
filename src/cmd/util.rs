use std::fs;
use std::path::Path;

use jj::nav::{NavOptions, Raw, Value, jj_with};

use crate::cmd::Result;

/// Read and decode a JSON document into a raw tree.
pub(crate) fn load_document(path: &Path) -> Result<Raw> {
	let bytes = fs::read(path)?;
	let json: serde_json::Value = serde_json::from_slice(&bytes)?;
	tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
	Ok(Raw::from(json))
}

/// Navigate from the document root along an optional field path.
pub(crate) fn select<'a>(root: &'a Raw, path_expr: Option<&str>, options: NavOptions) -> Result<Value<'a>> {
	let value = jj_with(root, options);
	match path_expr {
		Some(expr) => Ok(value.pointer(expr)?),
		None => Ok(value),
	}
}

/// Navigation options for command-line use; deprecation warnings follow the build default unless silenced.
pub(crate) fn nav_options(no_deprecation_warnings: bool) -> NavOptions {
	NavOptions {
		warn_deprecated: NavOptions::default().warn_deprecated && !no_deprecation_warnings,
	}
}
