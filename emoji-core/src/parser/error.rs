use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedIdent {
        token: Token,
    },
    ExpectedExpression {
        token: Token,
    },
    UnexpectedEof {
        expected: Vec<String>,
    },
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    NestingTooDeep {
        token: Token,
        limit: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan,
    pub line: u32,
}

impl ParseError {
    /// The token the parser stopped at.
    pub fn token(&self) -> Token {
        match &self.error {
            ParseErrorType::ExpectedIdent { token }
            | ParseErrorType::ExpectedExpression { token }
            | ParseErrorType::UnexpectedToken { token, .. }
            | ParseErrorType::NestingTooDeep { token, .. } => token.clone(),
            ParseErrorType::UnexpectedEof { .. } => Token::Eof,
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedIdent { token } => (
                "Expected identifier",
                vec![format!("Found {}", describe(token))]
            ),
            ParseErrorType::ExpectedExpression { token } => (
                "Expected expression",
                vec![format!("Found {}, which cannot start an expression", describe(token))]
            ),
            ParseErrorType::UnexpectedEof { expected } => {
                let messages = std::iter::once("Expected one of: ".to_string())
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Unexpected end of file", messages)
            },
            ParseErrorType::UnexpectedToken { token, expected } => {
                let messages = std::iter::once(format!("Found {}, expected one of: ", describe(token)))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::NestingTooDeep { limit, .. } => (
                "Nesting too deep",
                vec![format!("Blocks and expressions may nest at most {limit} levels")]
            ),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Int(_) | Token::Float(_) => format!("the number `{}`", token.as_literal()),
        Token::Str(_) => "a String".to_string(),
        Token::Ident(name) => format!("the identifier `{name}`"),
        Token::Eof => "end of file".to_string(),
        _ if token.is_reserved_word() => {
            format!("the keyword `{}` ({})", token.as_literal(), token.kind_name())
        },
        _ => format!("`{}` ({})", token.as_literal(), token.kind_name())
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan, line: u32) -> Result<T, ParseError> {
    Err(ParseError { error, span, line })
}
