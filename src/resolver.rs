//! Enabled-app list resolution

use crate::{CommandError, CommandResult};
use std::fs;
use std::path::Path;

/// File naming the apps enabled for this build, one per line.
pub const ENABLED_APPS_FILE: &str = "apps.txt";

/// Apps included in every build regardless of the enabled-app list.
pub const ALWAYS_ENABLED: [&str; 2] = ["Alarm", "Timer"];

/// Read the enabled-app list from `apps.txt` under `root`.
///
/// Lines are trimmed but otherwise taken as-is: blank lines and names the
/// registry does not know survive here and are dropped later, during
/// registry filtering. The always-enabled apps are appended at the end,
/// unconditionally; nothing dedups the result.
pub fn resolve_enabled_apps(root: &Path) -> CommandResult<Vec<String>> {
	let path = root.join(ENABLED_APPS_FILE);
	let content = fs::read_to_string(&path).map_err(|e| {
		CommandError::ExecutionError(format!(
			"Failed to read enabled-app list '{}': {}",
			path.display(),
			e
		))
	})?;

	let mut apps: Vec<String> = content
		.lines()
		.map(|line| line.trim().to_string())
		.collect();
	for name in ALWAYS_ENABLED {
		apps.push(name.to_string());
	}

	Ok(apps)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	#[test]
	fn test_resolve_appends_always_enabled() {
		let dir = TempDir::new().expect("create temp dir");
		fs::write(dir.path().join("apps.txt"), "Paddle\nTwos\n").expect("write apps.txt");

		let apps = resolve_enabled_apps(dir.path()).expect("resolve");
		assert_eq!(apps, vec!["Paddle", "Twos", "Alarm", "Timer"]);
	}

	#[test]
	fn test_resolve_trims_lines() {
		let dir = TempDir::new().expect("create temp dir");
		fs::write(dir.path().join("apps.txt"), "  Music  \n\tSteps\n").expect("write apps.txt");

		let apps = resolve_enabled_apps(dir.path()).expect("resolve");
		assert_eq!(apps, vec!["Music", "Steps", "Alarm", "Timer"]);
	}

	#[test]
	fn test_resolve_empty_file_still_has_always_enabled() {
		let dir = TempDir::new().expect("create temp dir");
		fs::write(dir.path().join("apps.txt"), "").expect("write apps.txt");

		let apps = resolve_enabled_apps(dir.path()).expect("resolve");
		assert_eq!(apps, vec!["Alarm", "Timer"]);
	}

	#[test]
	fn test_resolve_does_not_dedup() {
		let dir = TempDir::new().expect("create temp dir");
		fs::write(dir.path().join("apps.txt"), "Alarm\n").expect("write apps.txt");

		let apps = resolve_enabled_apps(dir.path()).expect("resolve");
		assert_eq!(apps, vec!["Alarm", "Alarm", "Timer"]);
	}

	#[test]
	fn test_resolve_missing_file_fails() {
		let dir = TempDir::new().expect("create temp dir");

		let result = resolve_enabled_apps(dir.path());
		assert!(result.is_err());
		let message = format!("{}", result.unwrap_err());
		assert!(message.contains("apps.txt"));
	}
}
