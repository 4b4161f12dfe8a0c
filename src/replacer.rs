use crate::similarity::similarity;

/// Minimum mean interior similarity to accept a lone block-anchor candidate.
const SINGLE_CANDIDATE_THRESHOLD: f64 = 0.3;
/// Minimum mean interior similarity for the best of several block-anchor candidates.
const MULTI_CANDIDATE_THRESHOLD: f64 = 0.5;

/// A candidate generator of the replacement cascade.
///
/// Each variant, given `(content, find)`, yields zero or more substrings of
/// `content` that the driver should try to replace literally. Variants are
/// pure and hold no state; a variant that cannot match yields nothing rather
/// than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacer {
	/// Yields `find` itself. Never inspects `content`.
	Exact,
	/// Window scan comparing lines with leading/trailing whitespace removed.
	LineTrimmed,
	/// Locates a block by its first/last line anchors and admits it when the
	/// interior lines are similar enough.
	BlockAnchor,
}

impl Replacer {
	/// Cascade order. New strategies may be appended; these three must not be
	/// reordered.
	pub const CASCADE: &'static [Replacer] = &[Replacer::Exact, Replacer::LineTrimmed, Replacer::BlockAnchor];

	pub fn name(&self) -> &'static str {
		match self {
			Replacer::Exact => "exact",
			Replacer::LineTrimmed => "line-trimmed",
			Replacer::BlockAnchor => "block-anchor",
		}
	}

	/// Candidate substrings of `content`, in the order the driver should try them.
	pub fn candidates(&self, content: &str, find: &str) -> Vec<String> {
		match self {
			Replacer::Exact => vec![find.to_string()],
			Replacer::LineTrimmed => line_trimmed_candidates(content, find),
			Replacer::BlockAnchor => block_anchor_candidates(content, find),
		}
	}
}

// region:    --- Line Trimmed

fn line_trimmed_candidates(content: &str, find: &str) -> Vec<String> {
	let original_lines: Vec<&str> = content.split('\n').collect();
	let mut search_lines: Vec<&str> = find.split('\n').collect();

	// A trailing empty element is an artifact of a terminal LF, not a line to match.
	if search_lines.last() == Some(&"") {
		search_lines.pop();
	}
	if search_lines.is_empty() || search_lines.len() > original_lines.len() {
		return Vec::new();
	}

	let mut candidates = Vec::new();

	for i in 0..=original_lines.len() - search_lines.len() {
		let window_matches = search_lines
			.iter()
			.enumerate()
			.all(|(j, search_line)| original_lines[i + j].trim() == search_line.trim());

		if window_matches {
			candidates.push(slice_lines(content, &original_lines, i, i + search_lines.len() - 1));
		}
	}

	candidates
}

// endregion: --- Line Trimmed

// region:    --- Block Anchor

fn block_anchor_candidates(content: &str, find: &str) -> Vec<String> {
	let original_lines: Vec<&str> = content.split('\n').collect();
	let mut search_lines: Vec<&str> = find.split('\n').collect();

	if search_lines.last() == Some(&"") {
		search_lines.pop();
	}
	// Anchors need at least one line between them to carry any signal.
	if search_lines.len() < 3 {
		return Vec::new();
	}

	let first_anchor = search_lines[0].trim();
	let last_anchor = search_lines[search_lines.len() - 1].trim();

	// -- Phase 1: collect (start, end) line pairs.
	// Each start index contributes at most one candidate; the nearest closing
	// anchor wins.
	let mut candidates: Vec<(usize, usize)> = Vec::new();
	for i in 0..original_lines.len() {
		if original_lines[i].trim() != first_anchor {
			continue;
		}
		for j in i + 2..original_lines.len() {
			if original_lines[j].trim() == last_anchor {
				candidates.push((i, j));
				break;
			}
		}
	}

	if candidates.is_empty() {
		return Vec::new();
	}

	// -- Phase 2: score the aligned interior prefix and select.
	if candidates.len() == 1 {
		// The anchor evidence alone is strong; a relaxed threshold applies,
		// and a candidate with no interior to compare is accepted outright.
		let (start, end) = candidates[0];
		return match interior_similarity(&original_lines, &search_lines, start, end) {
			Some(score) if score < SINGLE_CANDIDATE_THRESHOLD => Vec::new(),
			_ => vec![slice_lines(content, &original_lines, start, end)],
		};
	}

	// With competing candidates the interior must substantially favor one.
	let mut best: Option<(usize, usize)> = None;
	let mut best_score = -1.0;
	for &(start, end) in &candidates {
		let score = interior_similarity(&original_lines, &search_lines, start, end).unwrap_or(1.0);
		if score > best_score {
			best_score = score;
			best = Some((start, end));
		}
	}

	match best {
		Some((start, end)) if best_score >= MULTI_CANDIDATE_THRESHOLD => {
			vec![slice_lines(content, &original_lines, start, end)]
		}
		_ => Vec::new(),
	}
}

/// Mean line-level similarity over the aligned interior prefix of the
/// candidate span, or `None` when there is no interior to compare.
///
/// Only the first `interior_count` interior line pairs are compared; this is a
/// prefix walk, not a two-dimensional alignment, so blocks whose beginnings
/// agree score higher.
fn interior_similarity(original_lines: &[&str], search_lines: &[&str], start: usize, end: usize) -> Option<f64> {
	let span_len = end - start + 1;
	let interior_count = (search_lines.len() - 2).min(span_len.saturating_sub(2));
	if interior_count == 0 {
		return None;
	}

	let mut sum = 0.0;
	for k in 1..search_lines.len() - 1 {
		if start + k >= end {
			break;
		}
		sum += similarity(original_lines[start + k].trim(), search_lines[k].trim());
	}

	Some(sum / interior_count as f64)
}

// endregion: --- Block Anchor

// region:    --- Support

/// The exact byte span of `lines[start..=end]` within `content`, including the
/// LF after every line in the span except the last.
fn slice_lines(content: &str, lines: &[&str], start: usize, end: usize) -> String {
	let mut span_start = 0;
	for line in &lines[..start] {
		span_start += line.len() + 1; // +1 for the LF
	}

	let mut span_end = span_start;
	for (k, line) in lines[start..=end].iter().enumerate() {
		span_end += line.len();
		if start + k < end {
			span_end += 1;
		}
	}

	content[span_start..span_end].to_string()
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
