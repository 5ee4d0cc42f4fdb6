//! Marker substitution tests
//!
//! Tests for the two replacement modes: verbatim marker replacement and
//! whitespace-swallowing block replacement.

use apps_prebuild::template::{replace_block, replace_marker};
use rstest::rstest;

// =============================================================================
// Verbatim Replacement
// =============================================================================

/// Test that verbatim replacement keeps surrounding whitespace
///
/// **Category**: Happy Path
/// **Verifies**: replace_marker substitutes the token alone
#[rstest]
#[case("nScreens = @N_SCREENS@;", "nScreens = 2;")]
#[case("  @N_SCREENS@  ", "  2  ")]
#[case("@N_SCREENS@@N_SCREENS@", "22")]
fn test_replace_marker_keeps_layout(#[case] input: &str, #[case] expected: &str) {
	assert_eq!(replace_marker(input, "@N_SCREENS@", "2"), expected);
}

/// Test that replacement without a marker is the identity
///
/// **Category**: Edge Case
/// **Verifies**: content without the token is returned unchanged
#[rstest]
fn test_replace_marker_absent_is_identity() {
	let content = "no markers here\n";
	assert_eq!(replace_marker(content, "@N_SCREENS@", "2"), content);
}

// =============================================================================
// Block Replacement
// =============================================================================

/// Test that block replacement swallows surrounding whitespace
///
/// **Category**: Happy Path
/// **Verifies**: the marker and the whitespace around it are replaced wholesale
#[rstest]
#[case("head\n    @APPS@\n    tail", "head\nBODY\ntail")]
#[case("head @APPS@ tail", "head\nBODY\ntail")]
#[case("head@APPS@tail", "head\nBODY\ntail")]
fn test_replace_block_swallows_whitespace(#[case] input: &str, #[case] expected: &str) {
	let result = replace_block(input, "@APPS@", "\nBODY\n").expect("replace failed");
	assert_eq!(result, expected);
}

/// Test that every marker occurrence is replaced
///
/// **Category**: Edge Case
/// **Verifies**: block replacement is global, not first-match
#[rstest]
fn test_replace_block_all_occurrences() {
	let result = replace_block("@M@ x @M@", "@M@", "Y").expect("replace failed");
	assert_eq!(result, "YxY");
}

/// Test that generated content is inserted literally
///
/// **Category**: Edge Case
/// **Verifies**: `$` sequences in the block are not capture references
#[rstest]
fn test_replace_block_dollar_is_literal() {
	let result = replace_block("a @M@ b", "@M@", "$0$1").expect("replace failed");
	assert_eq!(result, "a$0$1b");
}

/// Test that the block controls its own layout
///
/// **Category**: Happy Path
/// **Verifies**: leading/trailing whitespace of the block survives intact
#[rstest]
fn test_replace_block_preserves_block_layout() {
	let block = "\n      Alarm,\n      Timer,\n";
	let result =
		replace_block("enum class Apps {\n      @M@\n};", "@M@", block).expect("replace failed");
	assert_eq!(result, "enum class Apps {\n      Alarm,\n      Timer,\n};");
}

/// Test that markers containing regex metacharacters are taken literally
///
/// **Category**: Edge Case
/// **Verifies**: the marker is escaped before compilation
#[rstest]
fn test_replace_block_escapes_marker() {
	let result = replace_block("x @A.B@ y", "@A.B@", "Z").expect("replace failed");
	assert_eq!(result, "xZy");
	// A dot in the marker must not match an arbitrary character.
	let untouched = replace_block("x @AxB@ y", "@A.B@", "Z").expect("replace failed");
	assert_eq!(untouched, "x @AxB@ y");
}
