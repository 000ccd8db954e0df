use std::path::PathBuf;

use emoji_core::eval::prelude::{run_source, Interpreter};

use crate::{cli::stderr_buffer_writer, prompt::read_line};

/// Runs each entered line on one interpreter, so bindings made on one
/// line are visible on the next.
pub fn start(mut interpreter: Interpreter) -> std::io::Result<()> {
	let buf_writer = stderr_buffer_writer();

	while let Some(input) = read_line()? {
		if input.trim().is_empty() {
			continue;
		}

		interpreter.clear_interrupt();

		match run_source(PathBuf::from("<repl>"), &input, &mut interpreter) {
			Ok(value) if value.is_unit() => {},
			Ok(value) => println!("{value}"),
			Err(err) if err.is_end_of_input() => return Ok(()),
			Err(err) => {
				let mut buf = buf_writer.buffer();
				err.pretty(&mut buf);
				buf_writer.print(&buf)?;
			}
		}
	}

	Ok(())
}
