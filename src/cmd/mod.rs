use thiserror::Error;

/// Strict conversion command.
pub mod get;
/// Pretty-print command.
pub mod print;

mod util;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Navigation or conversion failure.
	#[error(transparent)]
	Nav(#[from] jj::nav::JjError),
}
