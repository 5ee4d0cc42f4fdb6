//! Marker substitution for template-driven code generation
//!
//! Templates are plain text files containing `@MARKER@` tokens. Two
//! replacement modes exist: verbatim (the token alone is replaced, keeping
//! surrounding whitespace) and block (the token and the whitespace around
//! it are replaced wholesale, so the generated block controls its own
//! leading/trailing layout). Every occurrence of a marker is replaced.

use crate::{CommandError, CommandResult};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Replace every occurrence of `marker` verbatim, leaving the surrounding
/// whitespace in place.
pub fn replace_marker(content: &str, marker: &str, value: &str) -> String {
	content.replace(marker, value)
}

/// Replace every occurrence of `marker`, swallowing the whitespace around
/// it, with `block`.
///
/// The block is inserted literally; `$` sequences in generated content are
/// not treated as capture references.
pub fn replace_block(content: &str, marker: &str, block: &str) -> CommandResult<String> {
	let pattern = Regex::new(&format!(r"\s*{}\s*", regex::escape(marker))).map_err(|e| {
		CommandError::ExecutionError(format!("Invalid marker '{}': {}", marker, e))
	})?;
	Ok(pattern.replace_all(content, NoExpand(block)).into_owned())
}

/// Read a template file.
pub fn read_template(path: &Path) -> CommandResult<String> {
	fs::read_to_string(path).map_err(|e| {
		CommandError::ExecutionError(format!(
			"Failed to read template file '{}': {}",
			path.display(),
			e
		))
	})
}

/// Overwrite an output file with rendered content.
pub fn write_output(path: &Path, content: &str) -> CommandResult<()> {
	fs::write(path, content).map_err(|e| {
		CommandError::ExecutionError(format!(
			"Failed to write output file '{}': {}",
			path.display(),
			e
		))
	})
}
