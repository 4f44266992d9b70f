use std::path::PathBuf;

use crate::cmd::Result;
use crate::cmd::util::{load_document, nav_options, select};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	#[arg(long = "indent-unit", default_value = "  ")]
	pub indent_unit: String,
	#[arg(long = "no-deprecation-warnings")]
	pub no_deprecation_warnings: bool,
}

/// Pretty-print the document, or the node at `--path`.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		path_expr,
		indent_unit,
		no_deprecation_warnings,
	} = args;

	let root = load_document(&file)?;
	let value = select(&root, path_expr.as_deref(), nav_options(no_deprecation_warnings))?;

	println!("{}", value.pretty_print("", &indent_unit));
	Ok(())
}
