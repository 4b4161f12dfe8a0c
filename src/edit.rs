use crate::confirm::Confirm;
use crate::differ::build_unified_diff;
use crate::replace::replace_content;
use crate::replacer::Replacer;
use crate::sniff::read_text;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use simple_fs::SPath;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Parameters of the edit operation.
///
/// The wire names (`filePath`, `oldString`, `newString`, `replaceAll`) are
/// part of the public contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditParams {
	/// Absolute, or relative to the process working directory.
	pub file_path: String,
	/// The text to locate in the file.
	pub old_string: String,
	/// The text it becomes. Must differ from `old_string`.
	pub new_string: String,
	/// Replace every occurrence of the located candidate (default false).
	#[serde(default)]
	pub replace_all: bool,
}

impl EditParams {
	pub fn new(file_path: impl Into<String>, old_string: impl Into<String>, new_string: impl Into<String>) -> Self {
		Self {
			file_path: file_path.into(),
			old_string: old_string.into(),
			new_string: new_string.into(),
			replace_all: false,
		}
	}

	pub fn with_replace_all(mut self, replace_all: bool) -> Self {
		self.replace_all = replace_all;
		self
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct EditResult {
	/// Display path of the edited file.
	pub title: String,
	pub output: String,
	pub metadata: EditMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMetadata {
	pub replacements: usize,
}

/// Applies a fuzzy textual replacement to the file at `params.file_path`.
///
/// Strictly read, replace, diff, confirm, write. The diff and the written
/// content come from the same in-memory snapshot, and the write only happens
/// once the confirmer approves; on every failure path the file on disk is
/// byte-identical to what it was when the call started.
pub fn edit(params: &EditParams, confirmer: &dyn Confirm) -> Result<EditResult> {
	if params.old_string == params.new_string {
		return Err(Error::NoChange);
	}

	let path = resolve_path(&params.file_path)?;
	if !path.exists() {
		return Err(Error::file_not_found(&params.file_path));
	}
	if path.is_dir() {
		return Err(Error::is_directory(&params.file_path));
	}

	let content = read_text(&path)?;

	let replacement = replace_content(&content, &params.old_string, &params.new_string, params.replace_all)?;
	if replacement.replacer == Replacer::Exact {
		info!(path = path.as_str(), "edit located exactly");
	} else {
		warn!(
			path = path.as_str(),
			strategy = replacement.replacer.name(),
			"edit required fuzzy matching"
		);
	}

	let display_path = display_path(&path);
	let diff = build_unified_diff(&content, &replacement.content, &display_path);
	if !confirmer.confirm(&diff, &display_path) {
		return Err(Error::UserCancelled);
	}

	fs::write(&path, &replacement.content).map_err(|err| Error::io_write_file(path.as_str(), err))?;

	Ok(EditResult {
		title: display_path,
		output: "Edit applied successfully.".to_string(),
		metadata: EditMetadata {
			replacements: replacement.occurrences,
		},
	})
}

// region:    --- Support

fn resolve_path(file_path: &str) -> Result<SPath> {
	let path = Path::new(file_path);
	let absolute: PathBuf = if path.is_absolute() {
		path.to_path_buf()
	} else {
		env::current_dir()?.join(path)
	};

	Ok(SPath::try_from(absolute)?.into_collapsed())
}

/// Relative to the current working directory when the file lives under it,
/// absolute otherwise.
fn display_path(path: &SPath) -> String {
	let Ok(cwd) = env::current_dir() else {
		return path.as_str().to_string();
	};

	match path.std_path().strip_prefix(&cwd) {
		Ok(relative) => relative.to_string_lossy().into_owned(),
		Err(_) => path.as_str().to_string(),
	}
}

// endregion: --- Support
