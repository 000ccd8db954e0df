use std::io::Write;

const PROMPT: &str = ">> ";

/// Reads one line for an interactive loop. `None` means the loop should
/// end, either on `.exit` or when stdin is closed.
pub fn read_line() -> std::io::Result<Option<String>> {
	let mut input = String::new();

	print!("{}", PROMPT);
	std::io::stdout().flush()?;

	if std::io::stdin().read_line(&mut input)? == 0 {
		return Ok(None);
	}

	if let Some('\n') = input.chars().next_back() {
		input.pop();
	}
	if let Some('\r') = input.chars().next_back() {
		input.pop();
	}

	match input.as_str() {
		".exit" => Ok(None),
		_ => Ok(Some(input)),
	}
}
