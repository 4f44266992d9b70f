use std::fmt;
use std::str::FromStr;

use crate::nav::{JjError, Result};

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a mapping entry by key.
	Key(String),
	/// Select a sequence element by zero-based index.
	Index(usize),
}

/// Parsed field path expression such as `nested.items[0].name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may contain any character except `.`, `[` and `]`. A path may start
	/// with an index selector (`[2].name`).
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || JjError::InvalidFieldPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			if bytes[idx] != b'[' {
				let start = idx;
				while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
					idx += 1;
				}
				if idx == start {
					return Err(invalid());
				}
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() || bytes[idx] == b'[' {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

impl FromStr for FieldPath {
	type Err = JjError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Key(key) if i == 0 => f.write_str(key)?,
				PathStep::Key(key) => write!(f, ".{key}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}
