use emoji_core::lexer::prelude::{tokenize, Token};

use crate::prompt::read_line;

pub fn start() -> std::io::Result<()> {
	while let Some(input) = read_line()? {
		if input.trim().is_empty() {
			continue;
		}

		for spanned in tokenize(&input) {
			if spanned.token == Token::Eof {
				break;
			}

			println!("{:<8} {:<10} {}", spanned.token.kind_name(), spanned.text, spanned.location);
		}
	}

	Ok(())
}
