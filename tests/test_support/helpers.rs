use super::TestResult;
use simple_fs::SPath;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates a unique scratch directory under `tests/.out/` for one test.
pub fn new_out_dir(prefix: &str) -> TestResult<SPath> {
	let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
	let dir = PathBuf::from("tests/.out").join(format!("{prefix}_{now_ms}"));
	fs::create_dir_all(&dir)?;

	Ok(SPath::try_from(dir)?)
}

/// Writes a fixture file into `dir` and returns its path.
pub fn write_fixture(dir: &SPath, name: &str, content: impl AsRef<[u8]>) -> TestResult<SPath> {
	let path = dir.join(name);
	fs::write(&path, content.as_ref())?;

	Ok(path)
}
