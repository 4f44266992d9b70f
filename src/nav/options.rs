/// Root path label of a freshly wrapped value.
pub const ROOT_PATH: &str = "<root>";

/// Dead-end marker inserted when navigation continues through an absent value.
pub const NIL_MARKER: &str = "<nil>";

/// Navigation behavior carried from the root value to every derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions {
	/// Emit a `tracing` warning when a key with a `$<key>__deprecated` sibling is read.
	pub warn_deprecated: bool,
}

impl Default for NavOptions {
	fn default() -> Self {
		Self {
			warn_deprecated: cfg!(debug_assertions),
		}
	}
}

impl NavOptions {
	/// Options with every diagnostic side channel disabled.
	pub fn quiet() -> Self {
		Self { warn_deprecated: false }
	}
}
