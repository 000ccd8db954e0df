use super::prelude::{tokenize, Lexer, Token};

fn kinds(input: &str) -> Vec<Token> {
    tokenize(input).into_iter().map(|spanned| spanned.token).collect()
}

#[test]
fn test_keywords() {
    let input = "📦 ➡️ 📢 ❓ 🔄 🔁 🔂 🎯 📥 ⬅️ 👉 🔚 ⏱️ ✅ ❌ ➕ ➖ ✖️ ➗ 🟰 ❌🟰 ⬆️ ⬇️ 🤝 🎭 🚫 🔢 📝 🎲 ( )";

    let tokens = vec![
        Token::Store,
        Token::Assign,
        Token::Print,
        Token::If,
        Token::Else,
        Token::While,
        Token::Repeat,
        Token::Define,
        Token::Params,
        Token::Return,
        Token::Then,
        Token::End,
        Token::Timer,
        Token::True,
        Token::False,
        Token::Plus,
        Token::Minus,
        Token::Mult,
        Token::Div,
        Token::Equal,
        Token::NotEqual,
        Token::GreaterThan,
        Token::LessThan,
        Token::And,
        Token::Or,
        Token::Not,
        Token::Range,
        Token::Input,
        Token::Random,
        Token::LParen,
        Token::RParen,
        Token::Eof,
    ];

    for (idx, (token, next_token)) in tokens.iter().zip(kinds(input)).enumerate() {
        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }
}

#[test]
fn test_longest_match() {
    assert_eq!(kinds("❌🟰"), vec![Token::NotEqual, Token::Eof]);
    assert_eq!(kinds("❌ 🟰"), vec![Token::False, Token::Equal, Token::Eof]);
    assert_eq!(kinds("➡️"), vec![Token::Assign, Token::Eof]);
    assert_eq!(kinds("✖️✖"), vec![Token::Mult, Token::Mult, Token::Eof]);
}

#[test]
fn test_numerals() {
    assert_eq!(kinds("1️⃣0️⃣0️⃣"), vec![Token::Int(100), Token::Eof]);
    assert_eq!(kinds("🔟"), vec![Token::Int(10), Token::Eof]);
    assert_eq!(kinds("1️⃣🔟"), vec![Token::Int(110), Token::Eof]);
    assert_eq!(kinds("2️⃣ 3️⃣"), vec![Token::Int(2), Token::Int(3), Token::Eof]);
    assert_eq!(kinds("4⃣2⃣"), vec![Token::Int(42), Token::Eof]);
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("42 3.5 007"),
        vec![Token::Int(42), Token::Float(3.5), Token::Int(7), Token::Eof]
    );
    // malformed literals degrade to zero
    assert_eq!(kinds("1.2.3"), vec![Token::Float(0.0), Token::Eof]);
    assert_eq!(kinds("99999999999999999999"), vec![Token::Int(0), Token::Eof]);
}

#[test]
fn test_strings() {
    assert_eq!(
        kinds(r#""✅🎉" 'hi' "a\"b\n""#),
        vec![
            Token::Str("✅🎉".to_string()),
            Token::Str("hi".to_string()),
            Token::Str("a\"bn".to_string()),
            Token::Eof,
        ]
    );
    assert_eq!(kinds("\"open"), vec![Token::Str("open".to_string()), Token::Eof]);
}

#[test]
fn test_identifiers() {
    assert_eq!(
        kinds("🔵 counter_1 ❤️ _x"),
        vec![
            Token::Ident("🔵".to_string()),
            Token::Ident("counter_1".to_string()),
            Token::Ident("❤️".to_string()),
            Token::Ident("_x".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_comments_and_unknown_input() {
    let input = "📢 1️⃣ 💭 ignored ➕ 2️⃣\n# @ ; 📢 2";

    assert_eq!(
        kinds(input),
        vec![Token::Print, Token::Int(1), Token::Print, Token::Int(2), Token::Eof]
    );
}

#[test]
fn test_lines_and_spans() {
    let input = "📦 🔵 ➡️ 5️⃣\n\n📢 🔵";
    let tokens = tokenize(input);

    let lines = tokens.iter().map(|spanned| spanned.line).collect::<Vec<u32>>();
    assert_eq!(lines, vec![1, 1, 1, 1, 3, 3, 3]);

    let ident = &tokens[1];
    assert_eq!(ident.text, "🔵");
    assert_eq!(&input[ident.location.start as usize..ident.location.end as usize], "🔵");

    let numeral = &tokens[3];
    assert_eq!(numeral.text, "5️⃣");
    assert_eq!(numeral.location.end as usize, input.find('\n').unwrap());
}

#[test]
fn test_eof_is_always_last() {
    assert_eq!(kinds(""), vec![Token::Eof]);
    assert_eq!(kinds("   \n\t"), vec![Token::Eof]);

    let mut lexer = Lexer::new("📢".char_indices().map(|(i, c)| (i as u32, c)));
    assert_eq!(lexer.next().map(|spanned| spanned.token), Some(Token::Print));
    assert_eq!(lexer.next().map(|spanned| spanned.token), Some(Token::Eof));
    assert_eq!(lexer.next(), None);
}
