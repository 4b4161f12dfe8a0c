use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

/// How many characters of a fragment are echoed back in match errors.
const FRAGMENT_SUMMARY_MAX: usize = 48;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	#[display("{_0}")]
	#[from(String, &String, &str)]
	Custom(String),

	// -- Edit validation
	#[display("No changes to apply: oldString and newString are identical.")]
	NoChange,

	#[display("File not found: {path}")]
	FileNotFound { path: String },

	#[display("Path is a directory, not a file: {path}")]
	IsDirectory { path: String },

	#[display("Cannot edit binary file: {path}")]
	BinaryRefused { path: String },

	// -- Replacement
	#[display(
		"Could not find oldString in the file (starts with \"{fragment}\"). It must match the file content, including whitespace and indentation."
	)]
	MatchNotFound { fragment: String },

	#[display(
		"Found multiple matches for oldString (starts with \"{fragment}\"). Provide more surrounding context to make the match unique, or use replaceAll to change every instance."
	)]
	AmbiguousMatch { fragment: String },

	// -- Confirmation
	#[display("Edit cancelled by user")]
	UserCancelled,

	// -- Externals (captured as cause strings, but with editx semantics)
	#[display("Read file failed: {_0}")]
	IoReadFile(PathAndCause),

	#[display("Write file failed: {_0}")]
	IoWriteFile(PathAndCause),

	#[display("simple_fs error: {cause}")]
	SimpleFs { cause: String },
}

#[derive(Debug, Clone, Display)]
#[display("{path}, cause: {cause}")]
pub struct PathAndCause {
	pub path: String,
	pub cause: String,
}

// region:    --- Custom

impl Error {
	pub fn file_not_found(path: impl Into<String>) -> Self {
		Self::FileNotFound { path: path.into() }
	}

	pub fn is_directory(path: impl Into<String>) -> Self {
		Self::IsDirectory { path: path.into() }
	}

	pub fn binary_refused(path: impl Into<String>) -> Self {
		Self::BinaryRefused { path: path.into() }
	}

	pub fn match_not_found(fragment: &str) -> Self {
		Self::MatchNotFound {
			fragment: summarize_fragment(fragment),
		}
	}

	pub fn ambiguous_match(fragment: &str) -> Self {
		Self::AmbiguousMatch {
			fragment: summarize_fragment(fragment),
		}
	}

	pub fn io_read_file(path: impl Into<String>, err: impl std::error::Error) -> Self {
		Self::IoReadFile(PathAndCause {
			path: path.into(),
			cause: err.to_string(),
		})
	}

	pub fn io_write_file(path: impl Into<String>, err: impl std::error::Error) -> Self {
		Self::IoWriteFile(PathAndCause {
			path: path.into(),
			cause: err.to_string(),
		})
	}

	pub fn simple_fs(err: impl std::error::Error) -> Self {
		Self::SimpleFs { cause: err.to_string() }
	}
}

/// First line of the fragment, bounded. Error messages name the fragment only
/// in summary, never the surrounding file content.
fn summarize_fragment(fragment: &str) -> String {
	let first_line = fragment.lines().next().unwrap_or("");
	let mut summary: String = first_line.chars().take(FRAGMENT_SUMMARY_MAX).collect();
	if summary.len() < fragment.len() {
		summary.push_str("...");
	}
	summary
}

// endregion: --- Custom

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Froms

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Custom(err.to_string())
	}
}

impl From<simple_fs::Error> for Error {
	fn from(err: simple_fs::Error) -> Self {
		Self::simple_fs(err)
	}
}

// endregion: --- Froms
