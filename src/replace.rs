use crate::replacer::Replacer;
use crate::{Error, Result};

/// Outcome of a successful replacement pass.
#[derive(Debug, Clone)]
pub struct Replacement {
	/// The full new content.
	pub content: String,
	/// Number of textual substitutions performed (1 unless replace-all).
	pub occurrences: usize,
	/// The strategy that produced the accepted candidate.
	pub replacer: Replacer,
}

/// Locates `old_string` in `content` through the replacer cascade and splices
/// in `new_string`.
///
/// Replacers are tried in priority order, candidates in the order each one
/// yields them. A candidate that occurs more than once (without `replace_all`)
/// is skipped rather than fatal: a later strategy may still narrow the region
/// to a unique match.
pub fn replace_content(content: &str, old_string: &str, new_string: &str, replace_all: bool) -> Result<Replacement> {
	if old_string == new_string {
		return Err(Error::NoChange);
	}

	let mut found_any = false;

	for replacer in Replacer::CASCADE {
		for candidate in replacer.candidates(content, old_string) {
			let Some(index) = content.find(&candidate) else {
				continue;
			};
			found_any = true;

			if replace_all {
				let occurrences = content.matches(candidate.as_str()).count();
				return Ok(Replacement {
					content: content.replace(&candidate, new_string),
					occurrences,
					replacer: *replacer,
				});
			}

			let last_index = content.rfind(&candidate).unwrap_or(index);
			if index != last_index {
				continue;
			}

			let mut new_content = String::with_capacity(content.len() - candidate.len() + new_string.len());
			new_content.push_str(&content[..index]);
			new_content.push_str(new_string);
			new_content.push_str(&content[index + candidate.len()..]);

			return Ok(Replacement {
				content: new_content,
				occurrences: 1,
				replacer: *replacer,
			});
		}
	}

	if found_any {
		Err(Error::ambiguous_match(old_string))
	} else {
		Err(Error::match_not_found(old_string))
	}
}

// region:    --- Tests


// endregion: --- Tests
