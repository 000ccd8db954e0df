use crate::{
    lexer::prelude::{Lexer, Token},
    parser::prelude::{
        parse_module, parse_module_from_stream, Expression, InfixOperator, LogicalOperator,
        ParseError, ParseErrorType, Parser, PrefixOperator, Primitive, Statement, MAX_NESTING
    }
};

fn first_expression(input: &str) -> Expression {
    let module = parse_module(input).unwrap();

    match module.program.statements.into_iter().next() {
        Some(Statement::Expression(expression)) => expression,
        Some(Statement::Output(output)) => output.expression,
        other => panic!("Expected an expression statement, got {other:?}")
    }
}

#[test]
fn test_declarations() -> Result<(), ParseError> {
    let input = r#"
        📦 🔵 ➡️ 5️⃣
        🔵 ➡️ 🔵 ➕ 1️⃣
        📦 name ➡️ "Ada"
    "#;

    let parsed = parse_module(input)?;

    println!("{}", parsed.program);

    let statements = &parsed.program.statements;
    assert_eq!(statements.len(), 3);

    match &statements[0] {
        Statement::Assignment(assignment) => {
            assert!(assignment.declaration);
            assert_eq!(assignment.identifier.value, "🔵");
        },
        other => panic!("Expected assignment, got {other:?}")
    }

    match &statements[1] {
        Statement::Assignment(assignment) => {
            assert!(!assignment.declaration);
            assert!(matches!(&assignment.value, Expression::Infix(infix) if infix.operator == InfixOperator::Add));
        },
        other => panic!("Expected assignment, got {other:?}")
    }

    Ok(())
}

#[test]
fn test_shorthand_needs_lookahead() -> Result<(), ParseError> {
    // a bare identifier followed by something other than ➡️ is an expression
    let parsed = parse_module("🔵\n📢 🔵")?;

    assert!(matches!(parsed.program.statements[0], Statement::Expression(Expression::Identifier(_))));
    assert!(matches!(parsed.program.statements[1], Statement::Output(_)));

    Ok(())
}

#[test]
fn test_infixes() -> Result<(), ParseError> {
    let parsed = parse_module("📢 1 ➕ 2 ✖️ 3 ➖ 4 ➗ 2")?;

    assert_eq!(parsed.program.to_string(), "📢 ((1 ➕ (2 ✖️ 3)) ➖ (4 ➗ 2))");

    Ok(())
}

#[test]
fn test_logic_precedence() {
    // or binds loosest, then and, then not, then comparison
    let expression = first_expression("✅ 🎭 ❌ 🤝 🚫 1 🟰 2");

    assert_eq!(expression.to_string(), "(✅ 🎭 (❌ 🤝 🚫 (1 🟰 2)))");

    match expression {
        Expression::Logical(logical) => {
            assert_eq!(logical.operator, LogicalOperator::Or);

            match *logical.right {
                Expression::Logical(inner) => {
                    assert_eq!(inner.operator, LogicalOperator::And);
                    assert!(matches!(*inner.right, Expression::Prefix(ref prefix) if prefix.operator == PrefixOperator::Not));
                },
                other => panic!("Expected logical, got {other:?}")
            }
        },
        other => panic!("Expected logical, got {other:?}")
    }
}

#[test]
fn test_prefix() {
    assert_eq!(first_expression("➖➖5").to_string(), "➖➖5");
    assert_eq!(first_expression("🚫 🚫 ✅").to_string(), "🚫 🚫 ✅");
    assert_eq!(first_expression("➖2 ✖️ 3").to_string(), "(➖2 ✖️ 3)");
}

#[test]
fn test_comparison_does_not_chain() {
    assert_eq!(first_expression("1 ⬇️ 2").to_string(), "(1 ⬇️ 2)");

    // a dangling comparison operator cannot start the next statement
    let err = parse_module("1 ⬇️ 2 ⬇️ 3").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::ExpectedExpression { token: Token::LessThan }));
}

#[test]
fn test_grouping() {
    assert_eq!(first_expression("(1 ➕ 2) ✖️ 3").to_string(), "((1 ➕ 2) ✖️ 3)");
}

#[test]
fn test_conditionals() -> Result<(), ParseError> {
    let input = r#"
        ❓ 🔵 ⬆️ 3 👉
            📢 "big"
        🔄 👉
            📢 "small"
        🔚
        ❓ ✅ 👉 🔚
    "#;

    let parsed = parse_module(input)?;

    println!("{}", parsed.program);

    match &parsed.program.statements[0] {
        Statement::Conditional(conditional) => {
            assert_eq!(conditional.resolution.len(), 1);
            assert_eq!(conditional.alternative.as_ref().map(|block| block.len()), Some(1));
        },
        other => panic!("Expected conditional, got {other:?}")
    }

    match &parsed.program.statements[1] {
        Statement::Conditional(conditional) => {
            assert!(conditional.resolution.is_empty());
            assert!(conditional.alternative.is_none());
        },
        other => panic!("Expected conditional, got {other:?}")
    }

    Ok(())
}

#[test]
fn test_loops() -> Result<(), ParseError> {
    let input = r#"
        📦 i ➡️ 0
        🔁 i ⬇️ 3 👉 i ➡️ i ➕ 1 🔚
        🔂 3️⃣ 👉 📢 i 🔚
    "#;

    let parsed = parse_module(input)?;

    assert_eq!(
        parsed.program.to_string(),
        "📦 i ➡️ 0\n🔁 (i ⬇️ 3) 👉 i ➡️ (i ➕ 1) 🔚\n🔂 3 👉 📢 i 🔚"
    );

    Ok(())
}

#[test]
fn test_functions() -> Result<(), ParseError> {
    let input = r#"
        🎯 add 📥 a b 👉
            ⬅️ a ➕ b
        🔚
        🎯 hello 👉 📢 "hi" 🔚
        📢 add(1 2)
        hello()
    "#;

    let parsed = parse_module(input)?;

    println!("{}", parsed.program);

    match &parsed.program.statements[0] {
        Statement::Function(function) => {
            assert_eq!(function.name.value, "add");
            assert_eq!(
                function.params.iter().map(|param| param.value.as_str()).collect::<Vec<_>>(),
                vec!["a", "b"]
            );
            assert!(matches!(function.body[0], Statement::Return(_)));
        },
        other => panic!("Expected function, got {other:?}")
    }

    match &parsed.program.statements[1] {
        Statement::Function(function) => assert!(function.params.is_empty()),
        other => panic!("Expected function, got {other:?}")
    }

    match &parsed.program.statements[2] {
        Statement::Output(output) => match &output.expression {
            Expression::Call(call) => assert_eq!(call.arguments.len(), 2),
            other => panic!("Expected call, got {other:?}")
        },
        other => panic!("Expected output, got {other:?}")
    }

    assert!(matches!(parsed.program.statements[3], Statement::Expression(Expression::Call(_))));

    Ok(())
}

#[test]
fn test_chained_calls() {
    match first_expression("make(1)(2)") {
        Expression::Call(outer) => {
            assert!(matches!(*outer.callee, Expression::Call(_)));
            assert_eq!(outer.to_string(), "make(1)(2)");
        },
        other => panic!("Expected call, got {other:?}")
    }
}

#[test]
fn test_builtins() -> Result<(), ParseError> {
    let input = r#"
        📦 guess ➡️ 📝 "🔢➡️"
        📦 any ➡️ 📝
        📦 secret ➡️ 🎲 1 🔟
        📦 numbers ➡️ 🔢 1 5
        ⏱️
    "#;

    let parsed = parse_module(input)?;
    let statements = &parsed.program.statements;

    let assigned = |idx: usize| match &statements[idx] {
        Statement::Assignment(assignment) => assignment.value.clone(),
        other => panic!("Expected assignment, got {other:?}")
    };

    match assigned(0) {
        Expression::Input(input) => assert!(matches!(
            input.prompt.as_deref(),
            Some(Expression::Primitive(Primitive::Str { value, .. })) if value == "🔢➡️"
        )),
        other => panic!("Expected input, got {other:?}")
    }

    assert!(matches!(assigned(1), Expression::Input(ref input) if input.prompt.is_none()));
    assert_eq!(assigned(2).to_string(), "🎲 1 10");
    assert_eq!(assigned(3).to_string(), "🔢 1 5");
    assert!(matches!(statements[4], Statement::Timer { .. }));

    Ok(())
}

#[test]
fn test_spans() -> Result<(), ParseError> {
    let input = "📢 10 ➕ 2";
    let parsed = parse_module(input)?;

    let statement = &parsed.program.statements[0];
    let location = statement.location();

    assert_eq!(location.start, 0);
    assert_eq!(location.end as usize, input.len());

    Ok(())
}

#[test]
fn test_unterminated_block() {
    let err = parse_module("❓ ✅ 👉 📢 1").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::UnexpectedEof { .. }));
    assert_eq!(err.token(), Token::Eof);
}

#[test]
fn test_missing_then() {
    let err = parse_module("🔁 ✅ 📢 1 🔚").unwrap_err();

    match err.error {
        ParseErrorType::UnexpectedToken { token, expected } => {
            assert_eq!(token, Token::Print);
            assert_eq!(expected, vec!["`👉` (THEN)".to_string()]);
        },
        other => panic!("Expected unexpected token, got {other:?}")
    }
}

#[test]
fn test_errors_report_lines() {
    let err = parse_module("📢 1\n📢 2\n📦 ➡️ 3").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::ExpectedIdent { token: Token::Assign }));
    assert_eq!(err.line, 3);
}

#[test]
fn test_expected_expression() {
    let err = parse_module("📢 🔚").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::ExpectedExpression { token: Token::End }));
    assert_eq!(err.details().0, "Expected expression");
}

#[test]
fn test_display_reparses() -> Result<(), ParseError> {
    let input = r#"
        🎯 fib 📥 n 👉
            ❓ n ⬇️ 2 👉 ⬅️ n 🔚
            ⬅️ fib(n ➖ 1) ➕ fib(n ➖ 2)
        🔚
        📢 fib(🔟) 🟰 55 🤝 🚫 ❌
    "#;

    let first = parse_module(input)?;
    let second = parse_module(&first.program.to_string())?;

    assert_eq!(first.program.to_string(), second.program.to_string());

    Ok(())
}

#[test]
fn test_stream_matches_str() -> Result<(), ParseError> {
    let input = "📦 x ➡️ 1\n📢 x ➕ 2";

    let from_str = parse_module(input)?;
    let from_stream = parse_module_from_stream(input.chars())?;

    assert_eq!(from_str, from_stream);

    Ok(())
}

#[test]
fn test_parser_over_lexer() -> Result<(), ParseError> {
    let lexer = Lexer::new("📢 ✅".char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    let module = parser.parse()?;

    assert_eq!(module.program.statements.len(), 1);

    Ok(())
}

fn nesting_error(input: &str) -> Token {
    match parse_module(input) {
        Err(ParseError { error: ParseErrorType::NestingTooDeep { token, limit }, .. }) => {
            assert_eq!(limit, MAX_NESTING);
            token
        },
        other => panic!("Expected a nesting error, got {other:?}")
    }
}

#[test]
fn test_nesting_limit() {
    let parens = format!("📢 {}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(nesting_error(&parens), Token::LParen);

    let nots = format!("📢 {}✅", "🚫 ".repeat(100_000));
    assert_eq!(nesting_error(&nots), Token::Not);

    let negations = format!("📢 {}1", "➖ ".repeat(100_000));
    assert_eq!(nesting_error(&negations), Token::Minus);

    let blocks = format!("{}{}", "❓ ✅ 👉 ".repeat(300), "🔚 ".repeat(300));
    assert_eq!(nesting_error(&blocks), Token::If);

    let chain = format!("📢 {}1", "1 ➕ ".repeat(300));
    assert_eq!(nesting_error(&chain), Token::Plus);
}

#[test]
fn test_nesting_within_limit() -> Result<(), ParseError> {
    let parens = format!("📢 {}1{}", "(".repeat(150), ")".repeat(150));
    assert_eq!(parse_module(&parens)?.program.to_string(), "📢 1");

    // levels are released once a construct is closed
    let chain = format!("📢 {}1", "1 ➕ ".repeat(150));
    let program = format!("{chain}\n{chain}\n{chain}");
    assert_eq!(parse_module(&program)?.program.statements.len(), 3);

    Ok(())
}
