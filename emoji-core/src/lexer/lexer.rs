use std::cmp::Reverse;
use std::collections::VecDeque;
use std::fmt::Display;

use super::token::{Spanned, Token, COMMENT, KEYWORDS, NUMERALS};
use crate::utils::prelude::SrcSpan;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	input: T,
	lookahead: VecDeque<(u32, char)>,
	position: u32,
	line: u32,
	finished: bool,

	keywords: Vec<(&'static str, Token)>,
	numerals: Vec<(&'static str, &'static str)>,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tline: {},\n\tlookahead: {:?}\n}}",
			self.position, self.line, self.lookahead
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		// longest glyph first, so `❌🟰` wins over `❌` and `➡️` over `➡`
		let mut keywords = KEYWORDS.to_vec();
		keywords.sort_by_key(|(glyph, _)| Reverse(glyph.chars().count()));

		let mut numerals = NUMERALS.to_vec();
		numerals.sort_by_key(|(glyph, _)| Reverse(glyph.chars().count()));

		Self {
			input,
			lookahead: VecDeque::new(),
			position: 0,
			line: 1,
			finished: false,

			keywords,
			numerals,
		}
	}

	pub fn next_token(&mut self) -> Spanned {
		loop {
			let ch = match self.peek_char() {
				Some(ch) => ch,
				None => {
					self.finished = true;
					let start = self.position;

					return self.spanned(Token::Eof, String::new(), start, self.line);
				}
			};

			match ch {
				' ' | '\t' | '\r' => {
					self.next_char();
					continue;
				},
				'\n' => {
					self.next_char();
					self.line += 1;
					continue;
				},
				_ => {}
			}

			if self.starts_with(COMMENT) {
				self.skip_comment();
				continue;
			}

			if let Some(spanned) = self.lex_keyword() {
				return spanned;
			}

			if self.numeral_at_cursor().is_some() {
				return self.lex_numeral();
			}

			if !ch.is_ascii() {
				return self.lex_glyph_ident();
			}

			match ch {
				'0'..='9' => return self.lex_number(),
				'"' | '\'' => return self.lex_string(ch),
				'a'..='z' | 'A'..='Z' | '_' => return self.lex_ident(),
				'(' => return self.eat_one_char(Token::LParen),
				')' => return self.eat_one_char(Token::RParen),
				_ => {
					// anything else is dropped silently
					self.next_char();
				}
			}
		}
	}

	fn fill(&mut self, count: usize) {
		while self.lookahead.len() < count {
			match self.input.next() {
				Some(item) => self.lookahead.push_back(item),
				None => break
			}
		}
	}

	fn peek_char(&mut self) -> Option<char> {
		self.fill(1);
		let front = self.lookahead.front().copied();

		if let Some((pos, _)) = front {
			self.position = pos;
		}

		front.map(|(_, ch)| ch)
	}

	fn next_char(&mut self) -> Option<char> {
		self.fill(1);

		let (pos, ch) = self.lookahead.pop_front()?;
		self.position = pos + ch.len_utf8() as u32;

		Some(ch)
	}

	fn starts_with(&mut self, glyph: &str) -> bool {
		let count = glyph.chars().count();
		self.fill(count);

		self.lookahead.len() >= count && self.lookahead.iter()
			.zip(glyph.chars())
			.all(|((_, have), want)| *have == want)
	}

	/// Consumes `glyph` and returns it as owned text.
	fn eat_glyph(&mut self, glyph: &str) -> String {
		let mut text = String::with_capacity(glyph.len());

		for _ in glyph.chars() {
			if let Some(ch) = self.next_char() {
				text.push(ch);
			}
		}

		text
	}

	fn spanned(&self, token: Token, text: String, start: u32, line: u32) -> Spanned {
		Spanned {
			token,
			text,
			line,
			location: SrcSpan::from(start, self.position),
		}
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start = self.position;
		let mut text = String::new();

		if let Some(ch) = self.next_char() {
			text.push(ch);
		}

		self.spanned(token, text, start, self.line)
	}

	fn skip_comment(&mut self) {
		while let Some(ch) = self.peek_char() {
			if ch == '\n' {
				break;
			}

			self.next_char();
		}
	}

	fn lex_keyword(&mut self) -> Option<Spanned> {
		let start = self.position;

		for idx in 0..self.keywords.len() {
			let glyph = self.keywords[idx].0;

			if self.starts_with(glyph) {
				let token = self.keywords[idx].1.clone();
				let text = self.eat_glyph(glyph);

				return Some(self.spanned(token, text, start, self.line));
			}
		}

		None
	}

	fn numeral_at_cursor(&mut self) -> Option<(&'static str, &'static str)> {
		for idx in 0..self.numerals.len() {
			let numeral = self.numerals[idx];

			if self.starts_with(numeral.0) {
				return Some(numeral);
			}
		}

		None
	}

	fn lex_numeral(&mut self) -> Spanned {
		let start = self.position;
		let mut text = String::new();
		let mut digits = String::new();

		while let Some((glyph, value)) = self.numeral_at_cursor() {
			text.push_str(&self.eat_glyph(glyph));
			digits.push_str(value);
		}

		let value = digits.parse::<i64>().unwrap_or(0);

		self.spanned(Token::Int(value), text, start, self.line)
	}

	fn lex_glyph_ident(&mut self) -> Spanned {
		let start = self.position;
		let mut text = String::new();

		if let Some(ch) = self.next_char() {
			text.push(ch);
		}

		// keep a trailing emoji presentation selector with its glyph
		if self.starts_with("\u{FE0F}") {
			text.push_str(&self.eat_glyph("\u{FE0F}"));
		}

		self.spanned(Token::Ident(text.clone()), text, start, self.line)
	}

	fn lex_number(&mut self) -> Spanned {
		let start = self.position;
		let mut value = String::new();

		while let Some(ch) = self.peek_char() {
			if !(ch.is_ascii_digit() || ch == '.') {
				break;
			}

			self.next_char();
			value.push(ch);
		}

		let token = if value.contains('.') {
			Token::Float(value.parse::<f64>().unwrap_or(0.0))
		} else {
			Token::Int(value.parse::<i64>().unwrap_or(0))
		};

		self.spanned(token, value, start, self.line)
	}

	fn lex_string(&mut self, quote: char) -> Spanned {
		let start = self.position;
		let line = self.line;
		let mut text = String::new();
		let mut value = String::new();

		if let Some(ch) = self.next_char() {
			text.push(ch);
		}

		while let Some(ch) = self.next_char() {
			text.push(ch);

			if ch == quote {
				break;
			}

			if ch == '\n' {
				self.line += 1;
			}

			if ch == '\\' {
				// the escaped character is taken as is
				if let Some(escaped) = self.next_char() {
					if escaped == '\n' {
						self.line += 1;
					}

					text.push(escaped);
					value.push(escaped);
				}
				continue;
			}

			value.push(ch);
		}

		self.spanned(Token::Str(value), text, start, line)
	}

	fn lex_ident(&mut self) -> Spanned {
		let start = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.peek_char() {
			if !(ch.is_ascii_alphanumeric() || ch == '_') {
				break;
			}

			self.next_char();
			ident.push(ch);
		}

		self.spanned(Token::Ident(ident.clone()), ident, start, self.line)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = Spanned;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		Some(self.next_token())
	}
}

/// Splits `src` into tokens. The last token is always [`Token::Eof`].
pub fn tokenize(src: &str) -> Vec<Spanned> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c))).collect()
}
