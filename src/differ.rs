use similar::udiff::unified_diff;
use similar::Algorithm;

/// Context lines around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Builds the unified-diff text shown to the user before an edit is applied.
///
/// Headers are `--- a/<display_path>` / `+++ b/<display_path>` with LF line
/// endings. The diff is display-only; it plays no part in the replacement
/// itself.
pub fn build_unified_diff(old_content: &str, new_content: &str, display_path: &str) -> String {
	let from = format!("a/{display_path}");
	let to = format!("b/{display_path}");

	unified_diff(
		Algorithm::default(),
		old_content,
		new_content,
		CONTEXT_RADIUS,
		Some((from.as_str(), to.as_str())),
	)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_unified_diff_headers_and_hunk() {
		// -- Exec
		let diff = build_unified_diff("a=1\nb=2\nc=3\n", "a=1\nb=20\nc=3\n", "src/config.rs");

		// -- Check
		assert!(diff.starts_with("--- a/src/config.rs\n+++ b/src/config.rs\n"));
		assert!(diff.contains("@@"));
		assert!(diff.contains("-b=2\n"));
		assert!(diff.contains("+b=20\n"));
	}

	#[test]
	fn test_build_unified_diff_no_change_is_empty() {
		let diff = build_unified_diff("same\n", "same\n", "f.txt");
		assert!(diff.is_empty());
	}
}

// endregion: --- Tests
