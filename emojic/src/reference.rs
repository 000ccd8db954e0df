use emoji_core::lexer::prelude::{Token, COMMENT, KEYWORDS, NUMERALS};

fn describe(token: &Token) -> &'static str {
	match token {
		Token::Store => "declare a variable: 📦 name ➡️ value",
		Token::Assign => "assign: name ➡️ value",
		Token::Print => "print a value",
		Token::If => "conditional: ❓ cond 👉 ... 🔄 👉 ... 🔚",
		Token::Else => "else branch",
		Token::While => "loop while true: 🔁 cond 👉 ... 🔚",
		Token::Repeat => "repeat n times: 🔂 n 👉 ... 🔚",
		Token::Define => "define a function: 🎯 name 📥 a b 👉 ... 🔚",
		Token::Params => "parameter list",
		Token::Return => "return a value",
		Token::Then => "open a block",
		Token::End => "close a block",
		Token::Timer => "start the timer, then print the elapsed time",
		Token::True => "true",
		Token::False => "false",
		Token::Plus => "add or concatenate",
		Token::Minus => "subtract or negate",
		Token::Mult => "multiply",
		Token::Div => "divide",
		Token::Equal => "equal",
		Token::NotEqual => "not equal",
		Token::GreaterThan => "greater than",
		Token::LessThan => "less than",
		Token::And => "logical and",
		Token::Or => "logical or",
		Token::Not => "logical not",
		Token::Range => "inclusive range: 🔢 start end",
		Token::Input => "read a line: 📝 \"prompt\"",
		Token::Random => "random integer: 🎲 min max",
		_ => "",
	}
}

/// The glyph table, one line per keyword. Spellings without the
/// variation selector are left out.
pub fn banner() -> String {
	let mut lines = vec![
		"Emoji language reference".to_string(),
		String::new(),
	];

	let keywords = KEYWORDS.iter()
		.enumerate()
		.filter(|(idx, (_, token))| !KEYWORDS[..*idx].iter().any(|(_, seen)| seen == token))
		.map(|(_, (glyph, token))| format!("  {glyph:<4} {:<7} {}", token.kind_name(), describe(token)));

	lines.extend(keywords);
	lines.push(String::new());

	let numerals = NUMERALS.iter()
		.filter(|(glyph, _)| !glyph.contains('\u{20E3}') || glyph.contains('\u{FE0F}'))
		.map(|(glyph, digits)| format!("{glyph}={digits}"))
		.collect::<Vec<String>>();

	lines.push(format!("  numerals: {}", numerals.join(" ")));
	lines.push(format!("  comments: {COMMENT} to the end of the line"));
	lines.push("  strings: \"double\" or 'single' quoted".to_string());

	lines.join("\n")
}

pub fn print() {
	println!("{}", banner());
}

#[cfg(test)]
mod tests {
	use super::banner;

	#[test]
	fn test_banner_lists_each_keyword_once() {
		let banner = banner();

		assert_eq!(banner.matches("RETURN").count(), 1);
		assert!(banner.contains("⬅️"));
		assert!(banner.contains("🔟=10"));
		assert!(!banner.contains("1⃣="));
	}
}
