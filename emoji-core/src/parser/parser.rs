use crate::{lexer::prelude::{Lexer, Spanned, Token}, utils::prelude::SrcSpan};
use super::error::{parse_error, ParseError, ParseErrorType};
use super::ast::{Identifier, Module, Program};

static EOF: Token = Token::Eof;

/// How deep blocks and expressions may nest before parsing gives up.
pub const MAX_NESTING: u32 = 200;

pub trait Parse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError>;
}

pub struct Parser<T: Iterator<Item = Spanned>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,
    last_position: u32,
    last_line: u32,
    nesting: u32,

    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,
            last_position: 0,
            last_line: 1,
            nesting: 0,

            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    /// Moves one token forward and returns the token that was current.
    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();

        if let Some(spanned) = &t {
            self.last_position = spanned.location.end;
            self.last_line = spanned.line;
        }

        self.current_token = self.next_token.take();
        self.next_token = self.tokens.next();

        t
    }

    /// The current token, or [`Token::Eof`] once the stream is drained.
    pub fn current(&self) -> &Token {
        match &self.current_token {
            Some(spanned) => &spanned.token,
            None => &EOF,
        }
    }

    pub fn peek(&self) -> &Token {
        match &self.next_token {
            Some(spanned) => &spanned.token,
            None => &EOF,
        }
    }

    pub fn check(&self, token: &Token) -> bool {
        self.current() == token
    }

    pub fn current_span(&self) -> SrcSpan {
        match &self.current_token {
            Some(spanned) => spanned.location,
            None => SrcSpan::from(self.last_position, self.last_position),
        }
    }

    pub fn current_line(&self) -> u32 {
        match &self.current_token {
            Some(spanned) => spanned.line,
            None => self.last_line,
        }
    }

    /// End offset of the most recently consumed token.
    pub fn last_end(&self) -> u32 {
        self.last_position
    }

    /// Enters one more level of nesting at the current token.
    pub fn nest(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_NESTING {
            return parse_error(
                ParseErrorType::NestingTooDeep { token: self.current().clone(), limit: MAX_NESTING },
                self.current_span(),
                self.current_line()
            );
        }

        self.nesting += 1;
        Ok(())
    }

    /// Leaves `levels` levels entered with [`Parser::nest`]. A failed parse
    /// never unwinds the counter since parsing stops at the first error.
    pub fn unnest(&mut self, levels: u32) {
        self.nesting -= levels;
    }

    pub fn parse(&mut self) -> Result<Module, ParseError> {
        let program = Program::parse(self)?;

        Ok(Module {
            name: "".into(),
            program
        })
    }

    pub fn expect_one(&mut self, token: Token) -> Result<SrcSpan, ParseError> {
        if self.check(&token) {
            let span = self.current_span();
            self.step();

            return Ok(span);
        }

        self.unexpected(vec![format!("`{}` ({})", token.as_literal(), token.kind_name())])
    }

    pub fn expect_ident(&mut self) -> Result<Identifier, ParseError> {
        if let Token::Ident(value) = self.current() {
            let identifier = Identifier {
                value: value.clone(),
                location: self.current_span()
            };
            self.step();

            return Ok(identifier);
        }

        match self.current() {
            Token::Eof => self.unexpected(vec!["an Identifier".to_string()]),
            token => parse_error(
                ParseErrorType::ExpectedIdent { token: token.clone() },
                self.current_span(),
                self.current_line()
            )
        }
    }

    /// Fails at the current token, listing what would have been accepted.
    pub fn unexpected<R>(&self, expected: Vec<String>) -> Result<R, ParseError> {
        match self.current() {
            Token::Eof => parse_error(
                ParseErrorType::UnexpectedEof { expected },
                self.current_span(),
                self.current_line()
            ),
            token => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected
                },
                self.current_span(),
                self.current_line()
            )
        }
    }
}

pub fn parse_module(src: &str) -> Result<Module, ParseError> {
    let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    parser.parse()
}

pub fn parse_module_from_stream(stream: impl Iterator<Item = char>) -> Result<Module, ParseError> {
    let lexer = Lexer::new(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    );
    let mut parser = Parser::new(lexer);

    parser.parse()
}
