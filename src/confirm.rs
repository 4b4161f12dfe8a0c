use std::io::{self, BufRead, Write};

/// Binary decision collaborator consulted between diff and write.
pub trait Confirm {
	/// Returns true when the edit should be applied.
	fn confirm(&self, diff: &str, display_path: &str) -> bool;
}

/// Renders the diff on stdout and asks a yes/no question on stdin.
///
/// End-of-input or a read failure counts as a decline, so an aborted prompt
/// can never apply the edit.
pub struct ConsoleConfirm;

impl Confirm for ConsoleConfirm {
	fn confirm(&self, diff: &str, display_path: &str) -> bool {
		println!("\nProposed edit: {display_path}\n");
		println!("{diff}");
		print!("Apply this edit? (y/n): ");
		if io::stdout().flush().is_err() {
			return false;
		}

		let mut answer = String::new();
		match io::stdin().lock().read_line(&mut answer) {
			Ok(0) | Err(_) => false,
			Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
		}
	}
}

/// Unconditional approval, for non-interactive hosts and tests.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
	fn confirm(&self, _diff: &str, _display_path: &str) -> bool {
		true
	}
}
