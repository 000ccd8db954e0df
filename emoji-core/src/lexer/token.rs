use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // single glyph or <letter|_>{<letter>|<digit>|_}
    Ident(String),
    // {<digit glyph>} | {<digit>}
    Int(i64),
    // {<digit>}.{<digit>}
    Float(f64),
    // "..." | '...'
    Str(String),

    // Statements
    Store, // 📦
    Assign, // ➡️
    Print, // 📢
    If, // ❓
    Else, // 🔄
    While, // 🔁
    Repeat, // 🔂
    Define, // 🎯
    Params, // 📥
    Return, // ⬅️
    Then, // 👉
    End, // 🔚
    Timer, // ⏱️

    // Boolean constants
    True, // ✅
    False, // ❌

    // Arithmetic
    Plus, // ➕
    Minus, // ➖
    Mult, // ✖️
    Div, // ➗

    // Comparison
    Equal, // 🟰
    NotEqual, // ❌🟰
    GreaterThan, // ⬆️
    LessThan, // ⬇️

    // Logic
    And, // 🤝
    Or, // 🎭
    Not, // 🚫

    // Builtins
    Range, // 🔢
    Input, // 📝
    Random, // 🎲

    LParen, // (
    RParen, // )

    Eof,
}

pub const COMMENT: &str = "💭";

/// Glyph spellings of every keyword. Spellings without the U+FE0F
/// variation selector are accepted as well.
pub const KEYWORDS: &[(&str, Token)] = &[
    ("📦", Token::Store),
    ("➡️", Token::Assign),
    ("➡", Token::Assign),
    ("📢", Token::Print),
    ("❓", Token::If),
    ("🔄", Token::Else),
    ("🔁", Token::While),
    ("🔂", Token::Repeat),
    ("🎯", Token::Define),
    ("📥", Token::Params),
    ("⬅️", Token::Return),
    ("⬅", Token::Return),
    ("👉", Token::Then),
    ("🔚", Token::End),
    ("⏱️", Token::Timer),
    ("⏱", Token::Timer),
    ("✅", Token::True),
    ("❌", Token::False),
    ("➕", Token::Plus),
    ("➖", Token::Minus),
    ("✖️", Token::Mult),
    ("✖", Token::Mult),
    ("➗", Token::Div),
    ("🟰", Token::Equal),
    ("❌🟰", Token::NotEqual),
    ("⬆️", Token::GreaterThan),
    ("⬆", Token::GreaterThan),
    ("⬇️", Token::LessThan),
    ("⬇", Token::LessThan),
    ("🤝", Token::And),
    ("🎭", Token::Or),
    ("🚫", Token::Not),
    ("🔢", Token::Range),
    ("📝", Token::Input),
    ("🎲", Token::Random),
];

/// Numeral glyphs and the decimal digits each one contributes.
pub const NUMERALS: &[(&str, &str)] = &[
    ("0️⃣", "0"), ("1️⃣", "1"), ("2️⃣", "2"), ("3️⃣", "3"), ("4️⃣", "4"),
    ("5️⃣", "5"), ("6️⃣", "6"), ("7️⃣", "7"), ("8️⃣", "8"), ("9️⃣", "9"),
    ("0⃣", "0"), ("1⃣", "1"), ("2⃣", "2"), ("3⃣", "3"), ("4⃣", "4"),
    ("5⃣", "5"), ("6⃣", "6"), ("7⃣", "7"), ("8⃣", "8"), ("9⃣", "9"),
    ("🔟", "10"),
];

/// A token together with the text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub text: String,
    pub line: u32,
    pub location: SrcSpan,
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        match self {
            Token::Store
            | Token::Print
            | Token::If
            | Token::Else
            | Token::While
            | Token::Repeat
            | Token::Define
            | Token::Params
            | Token::Return
            | Token::Then
            | Token::End
            | Token::Timer
            | Token::Range
            | Token::Input
            | Token::Random => true,
            _ => false
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Token::Equal | Token::NotEqual | Token::GreaterThan | Token::LessThan)
    }

    /// Canonical source spelling.
    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => value.to_string(),
            Token::Float(value) => value.to_string(),
            Token::Str(value) => format!("{value:?}"),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Eof => "end of file".to_string(),
            keyword => KEYWORDS.iter()
                .find(|(_, token)| token == keyword)
                .map(|(glyph, _)| glyph.to_string())
                .unwrap_or_default(),
        }
    }

    /// Upper-case kind name used in diagnostics, e.g. `THEN`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Ident(_) => "ID",
            Token::Int(_) | Token::Float(_) => "NUM",
            Token::Str(_) => "STR",
            Token::Store => "STORE",
            Token::Assign => "ASSIGN",
            Token::Print => "PRINT",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::While => "WHILE",
            Token::Repeat => "REPEAT",
            Token::Define => "DEFINE",
            Token::Params => "PARAMS",
            Token::Return => "RETURN",
            Token::Then => "THEN",
            Token::End => "END",
            Token::Timer => "TIMER",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Mult => "MULT",
            Token::Div => "DIV",
            Token::Equal => "EQ",
            Token::NotEqual => "NEQ",
            Token::GreaterThan => "GT",
            Token::LessThan => "LT",
            Token::And => "AND",
            Token::Or => "OR",
            Token::Not => "NOT",
            Token::Range => "RANGE",
            Token::Input => "INPUT",
            Token::Random => "RANDOM",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::Eof => "EOF",
        }
    }
}
