use crate::{Error, Result};
use simple_fs::SPath;
use std::fs;

/// How many leading bytes the text probe inspects.
const PROBE_LEN: usize = 4096;
/// Non-printable ratio above which the probe declares the content binary.
const MAX_NON_PRINTABLE_RATIO: f64 = 0.3;

/// Reads the file as UTF-8 text, refusing content the probe flags as binary.
///
/// Non-UTF-8 content is refused the same way; the engine only ever edits text.
pub fn read_text(path: &SPath) -> Result<String> {
	let bytes = fs::read(path).map_err(|err| Error::io_read_file(path.as_str(), err))?;

	if looks_binary(&bytes) {
		return Err(Error::binary_refused(path.as_str()));
	}

	String::from_utf8(bytes).map_err(|_| Error::binary_refused(path.as_str()))
}

/// Content heuristic: a NUL byte, or an excessive ratio of non-printable
/// bytes, within the probe window.
pub fn looks_binary(bytes: &[u8]) -> bool {
	let probe = &bytes[..bytes.len().min(PROBE_LEN)];
	if probe.is_empty() {
		return false;
	}

	if probe.contains(&0) {
		return true;
	}

	let non_printable = probe
		.iter()
		.filter(|&&b| b < 0x20 && b != b'\n' && b != b'\r' && b != b'\t')
		.count();

	non_printable as f64 / probe.len() as f64 > MAX_NON_PRINTABLE_RATIO
}

// region:    --- Tests


// endregion: --- Tests
