use emoji_core::parser::prelude::parse_module;

use crate::prompt::read_line;

pub fn start() -> std::io::Result<()> {
	while let Some(input) = read_line()? {
		if input.trim().is_empty() {
			continue;
		}

		match parse_module(&input) {
			Ok(module) => {
				println!("{}", module.program);
			},
			Err(err) => {
				let (message, messages) = err.details();

				println!("Parse error at line {}: {}.\n\t{}", err.line, message, messages.join(";\n\t"))
			}
		}
	}

	Ok(())
}
