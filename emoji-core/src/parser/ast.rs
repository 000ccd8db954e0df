use std::{fmt::Display, rc::Rc};

use crate::{
    lexer::prelude::{Spanned, Token},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

pub type Block = Vec<Statement>;

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub program: Program
}

// program -> { <statement> } EOF
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Block,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Program {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.current_span().start;
        let mut statements = vec![];

        while !parser.check(&Token::Eof) {
            statements.push(Statement::parse(parser)?);
        }

        Ok(Self {
            statements,
            location: SrcSpan { start, end: parser.current_span().end }
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements.iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join("\n"))
    }
}

/// Reads statements until one of `terminators` is current. The terminator
/// itself is left for the caller.
fn parse_block<T: Iterator<Item = Spanned>>(
    parser: &mut Parser<T>,
    terminators: &[Token]
) -> Result<Block, ParseError> {
    let mut statements = vec![];
    parser.nest()?;

    while !terminators.iter().any(|token| parser.check(token)) {
        if parser.check(&Token::Eof) {
            return parser.unexpected(expected_list(terminators));
        }

        statements.push(Statement::parse(parser)?);
    }

    parser.unnest(1);
    Ok(statements)
}

fn expected_list(tokens: &[Token]) -> Vec<String> {
    tokens.iter()
        .map(|token| format!("`{}` ({})", token.as_literal(), token.kind_name()))
        .collect()
}

fn display_block(block: &[Statement]) -> String {
    block.iter()
        .map(|statement| format!("{statement} "))
        .collect()
}

// statement -> <timer> | <assignment> | <output> | <conditional> | <conditional_loop>
//            | <fixed_loop> | <function> | <return> | <expression>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    Output(Output),
    Conditional(Conditional),
    ConditionalLoop(ConditionalLoop),
    FixedLoop(FixedLoop),
    Function(Function),
    Return(Return),
    Timer {
        location: SrcSpan
    },
    Expression(Expression),
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Statement {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let res = match parser.current() {
            Token::Timer => Self::Timer { location: parser.expect_one(Token::Timer)? },
            Token::Store => Self::Assignment(Assignment::parse(parser)?),
            // one token of lookahead tells `x ➡️ ...` apart from a bare `x`
            Token::Ident(_) if parser.peek() == &Token::Assign => {
                Self::Assignment(Assignment::parse(parser)?)
            },
            Token::Print => Self::Output(Output::parse(parser)?),
            Token::If => Self::Conditional(Conditional::parse(parser)?),
            Token::While => Self::ConditionalLoop(ConditionalLoop::parse(parser)?),
            Token::Repeat => Self::FixedLoop(FixedLoop::parse(parser)?),
            Token::Define => Self::Function(Function::parse(parser)?),
            Token::Return => Self::Return(Return::parse(parser)?),
            _ => Self::Expression(Expression::parse(parser)?)
        };

        Ok(res)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Output(output) => write!(f, "{output}"),
            Self::Conditional(conditional) => write!(f, "{conditional}"),
            Self::ConditionalLoop(loop_) => write!(f, "{loop_}"),
            Self::FixedLoop(loop_) => write!(f, "{loop_}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Return(return_) => write!(f, "{return_}"),
            Self::Timer { .. } => write!(f, "{}", Token::Timer.as_literal()),
            Self::Expression(expression) => write!(f, "{expression}")
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Assignment(assignment) => assignment.location,
            Self::Output(output) => output.location,
            Self::Conditional(conditional) => conditional.location,
            Self::ConditionalLoop(loop_) => loop_.location,
            Self::FixedLoop(loop_) => loop_.location,
            Self::Function(function) => function.location,
            Self::Return(return_) => return_.location,
            Self::Timer { location } => *location,
            Self::Expression(expression) => expression.location()
        }
    }
}

// assignment -> [📦] <identifier> ➡️ <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub value: Expression,
    /// `true` for the `📦` form, which introduces a fresh binding.
    pub declaration: bool,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Assignment {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (declaration, start) = match parser.check(&Token::Store) {
            true => (true, parser.expect_one(Token::Store)?.start),
            false => (false, parser.current_span().start)
        };

        let identifier = parser.expect_ident()?;
        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser)?;
        let end = value.location().end;

        Ok(Self {
            identifier,
            value,
            declaration,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.declaration {
            write!(f, "{} ", Token::Store.as_literal())?;
        }

        write!(f, "{} {} {}", self.identifier, Token::Assign.as_literal(), self.value)
    }
}

// output -> 📢 <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub expression: Expression,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Output {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::Print)?.start;

        let expression = Expression::parse(parser)?;
        let end = expression.location().end;

        Ok(Self {
            expression,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", Token::Print.as_literal(), self.expression)
    }
}

// conditional -> ❓ <expression> 👉 { <statement> } [ 🔄 👉 { <statement> } ] 🔚
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Expression,
    pub resolution: Block,
    pub alternative: Option<Block>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Conditional {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::If)?.start;

        let condition = Expression::parse(parser)?;
        parser.expect_one(Token::Then)?;

        let resolution = parse_block(parser, &[Token::Else, Token::End])?;

        let alternative = match parser.check(&Token::Else) {
            true => {
                parser.step();
                parser.expect_one(Token::Then)?;

                Some(parse_block(parser, &[Token::End])?)
            },
            false => None
        };

        let end = parser.expect_one(Token::End)?.end;

        Ok(Self {
            condition,
            resolution,
            alternative,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Conditional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}",
            Token::If.as_literal(),
            self.condition,
            Token::Then.as_literal(),
            display_block(&self.resolution)
        )?;

        if let Some(alternative) = &self.alternative {
            write!(f, "{} {} {}",
                Token::Else.as_literal(),
                Token::Then.as_literal(),
                display_block(alternative)
            )?;
        }

        write!(f, "{}", Token::End.as_literal())
    }
}

// conditional_loop -> 🔁 <expression> 👉 { <statement> } 🔚
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalLoop {
    pub condition: Expression,
    pub block: Block,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for ConditionalLoop {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::While)?.start;

        let condition = Expression::parse(parser)?;
        parser.expect_one(Token::Then)?;

        let block = parse_block(parser, &[Token::End])?;
        let end = parser.expect_one(Token::End)?.end;

        Ok(Self {
            condition,
            block,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for ConditionalLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}{}",
            Token::While.as_literal(),
            self.condition,
            Token::Then.as_literal(),
            display_block(&self.block),
            Token::End.as_literal()
        )
    }
}

// fixed_loop -> 🔂 <expression> 👉 { <statement> } 🔚
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLoop {
    pub count: Expression,
    pub block: Block,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for FixedLoop {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::Repeat)?.start;

        let count = Expression::parse(parser)?;
        parser.expect_one(Token::Then)?;

        let block = parse_block(parser, &[Token::End])?;
        let end = parser.expect_one(Token::End)?.end;

        Ok(Self {
            count,
            block,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for FixedLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}{}",
            Token::Repeat.as_literal(),
            self.count,
            Token::Then.as_literal(),
            display_block(&self.block),
            Token::End.as_literal()
        )
    }
}

// function -> 🎯 <identifier> [ 📥 { <identifier> } ] 👉 { <statement> } 🔚
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    /// Shared with every function value created from this definition.
    pub body: Rc<Block>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Function {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::Define)?.start;

        let name = parser.expect_ident()?;

        let mut params = vec![];

        if parser.check(&Token::Params) {
            parser.step();

            while !parser.check(&Token::Then) {
                params.push(parser.expect_ident()?);
            }
        }

        parser.expect_one(Token::Then)?;

        let body = parse_block(parser, &[Token::End])?;
        let end = parser.expect_one(Token::End)?.end;

        Ok(Self {
            name,
            params,
            body: Rc::new(body),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", Token::Define.as_literal(), self.name)?;

        if !self.params.is_empty() {
            let params = self.params.iter()
                .map(|param| param.value.clone())
                .collect::<Vec<String>>();

            write!(f, "{} {} ", Token::Params.as_literal(), params.join(" "))?;
        }

        write!(f, "{} {}{}",
            Token::Then.as_literal(),
            display_block(&self.body),
            Token::End.as_literal()
        )
    }
}

// return -> ⬅️ <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Expression,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Return {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::Return)?.start;

        let value = Expression::parse(parser)?;
        let end = value.location().end;

        Ok(Self {
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Return {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", Token::Return.as_literal(), self.value)
    }
}

// expression -> <logic_or>
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Primitive(Primitive),
    Infix(Infix),
    Prefix(Prefix),
    Logical(Logical),
    Range(Range),
    Input(Input),
    Random(Random),
    Call(Call),
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Expression {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        parse_logic_or(parser)
    }
}

// logic_or -> <logic_and> { 🎭 <logic_and> }
fn parse_logic_or<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let mut left = parse_logic_and(parser)?;
    let mut levels = 0;

    while parser.check(&Token::Or) {
        parser.nest()?;
        levels += 1;

        parser.step();
        let right = parse_logic_and(parser)?;

        left = Expression::Logical(Logical::new(LogicalOperator::Or, left, right));
    }

    parser.unnest(levels);
    Ok(left)
}

// logic_and -> <logic_not> { 🤝 <logic_not> }
fn parse_logic_and<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let mut left = parse_logic_not(parser)?;
    let mut levels = 0;

    while parser.check(&Token::And) {
        parser.nest()?;
        levels += 1;

        parser.step();
        let right = parse_logic_not(parser)?;

        left = Expression::Logical(Logical::new(LogicalOperator::And, left, right));
    }

    parser.unnest(levels);
    Ok(left)
}

// logic_not -> 🚫 <logic_not> | <comparison>
fn parse_logic_not<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    if !parser.check(&Token::Not) {
        return parse_comparison(parser);
    }

    parser.nest()?;
    let start = parser.expect_one(Token::Not)?.start;
    let operand = parse_logic_not(parser)?;
    parser.unnest(1);

    Ok(Expression::Prefix(Prefix::new(PrefixOperator::Not, start, operand)))
}

// comparison -> <term> [ (🟰 | ❌🟰 | ⬆️ | ⬇️) <term> ]
fn parse_comparison<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let left = parse_term(parser)?;

    match InfixOperator::from_token(parser.current()) {
        Some(operator) if operator.is_comparison() => {
            parser.step();
            let right = parse_term(parser)?;

            Ok(Expression::Infix(Infix::new(operator, left, right)))
        },
        _ => Ok(left)
    }
}

// term -> <factor> { (➕ | ➖) <factor> }
fn parse_term<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let mut left = parse_factor(parser)?;
    let mut levels = 0;

    while let Some(operator) = InfixOperator::from_token(parser.current())
        .filter(|operator| matches!(operator, InfixOperator::Add | InfixOperator::Subtract))
    {
        parser.nest()?;
        levels += 1;

        parser.step();
        let right = parse_factor(parser)?;

        left = Expression::Infix(Infix::new(operator, left, right));
    }

    parser.unnest(levels);
    Ok(left)
}

// factor -> <unary> { (✖️ | ➗) <unary> }
fn parse_factor<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let mut left = parse_unary(parser)?;
    let mut levels = 0;

    while let Some(operator) = InfixOperator::from_token(parser.current())
        .filter(|operator| matches!(operator, InfixOperator::Multiply | InfixOperator::Divide))
    {
        parser.nest()?;
        levels += 1;

        parser.step();
        let right = parse_unary(parser)?;

        left = Expression::Infix(Infix::new(operator, left, right));
    }

    parser.unnest(levels);
    Ok(left)
}

// unary -> ➖ <unary> | <call>
fn parse_unary<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    if !parser.check(&Token::Minus) {
        return parse_call(parser);
    }

    parser.nest()?;
    let start = parser.expect_one(Token::Minus)?.start;
    let operand = parse_unary(parser)?;
    parser.unnest(1);

    Ok(Expression::Prefix(Prefix::new(PrefixOperator::Negate, start, operand)))
}

// call -> <primary> { "(" { <expression> } ")" }
fn parse_call<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let mut expression = parse_primary(parser)?;
    let mut levels = 0;

    while parser.check(&Token::LParen) {
        parser.nest()?;
        levels += 1;

        parser.step();

        let mut arguments = vec![];

        while !parser.check(&Token::RParen) {
            if parser.check(&Token::Eof) {
                return parser.unexpected(expected_list(&[Token::RParen]));
            }

            arguments.push(Expression::parse(parser)?);
        }

        let end = parser.expect_one(Token::RParen)?.end;
        let start = expression.location().start;

        expression = Expression::Call(Call {
            callee: Box::new(expression),
            arguments,
            location: SrcSpan { start, end }
        });
    }

    parser.unnest(levels);
    Ok(expression)
}

// builtins and groups hold expressions of their own
fn parse_nested<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    match parser.current() {
        Token::Range => Ok(Expression::Range(Range::parse(parser)?)),
        Token::Input => Ok(Expression::Input(Input::parse(parser)?)),
        Token::Random => Ok(Expression::Random(Random::parse(parser)?)),
        _ => {
            parser.expect_one(Token::LParen)?;
            let expression = Expression::parse(parser)?;
            parser.expect_one(Token::RParen)?;

            Ok(expression)
        },
    }
}

// primary -> <number> | <string> | ✅ | ❌ | <range> | <input> | <random>
//          | <identifier> | "(" <expression> ")"
fn parse_primary<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    let location = parser.current_span();

    let expression = match parser.current() {
        Token::Int(value) => Expression::Primitive(Primitive::Int { value: *value, location }),
        Token::Float(value) => Expression::Primitive(Primitive::Float { value: *value, location }),
        Token::Str(value) => Expression::Primitive(Primitive::Str { value: value.clone(), location }),
        Token::True => Expression::Primitive(Primitive::Bool { value: true, location }),
        Token::False => Expression::Primitive(Primitive::Bool { value: false, location }),
        Token::Ident(value) => Expression::Identifier(Identifier { value: value.clone(), location }),
        Token::Range | Token::Input | Token::Random | Token::LParen => {
            parser.nest()?;
            let expression = parse_nested(parser)?;
            parser.unnest(1);

            return Ok(expression);
        },
        Token::Eof => return parser.unexpected(vec!["an expression".to_string()]),
        token => return parse_error(
            ParseErrorType::ExpectedExpression { token: token.clone() },
            location,
            parser.current_line()
        )
    };

    parser.step();

    Ok(expression)
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
            Self::Logical(logical) => write!(f, "{logical}"),
            Self::Range(range) => write!(f, "{range}"),
            Self::Input(input) => write!(f, "{input}"),
            Self::Random(random) => write!(f, "{random}"),
            Self::Call(call) => write!(f, "{call}")
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(ident) => ident.location,
            Self::Primitive(primitive) => primitive.location(),
            Self::Infix(infix) => infix.location,
            Self::Prefix(prefix) => prefix.location,
            Self::Logical(logical) => logical.location,
            Self::Range(range) => range.location,
            Self::Input(input) => input.location,
            Self::Random(random) => random.location,
            Self::Call(call) => call.location
        }
    }
}

// identifier -> <glyph> | <letter> { <letter> | <digit> }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Greater,
    Less,
}

impl InfixOperator {
    pub fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
            Token::Plus => Self::Add,
            Token::Minus => Self::Subtract,
            Token::Mult => Self::Multiply,
            Token::Div => Self::Divide,
            Token::Equal => Self::Equal,
            Token::NotEqual => Self::NotEqual,
            Token::GreaterThan => Self::Greater,
            Token::LessThan => Self::Less,
            _ => return None
        })
    }

    pub fn token(&self) -> Token {
        match self {
            Self::Add => Token::Plus,
            Self::Subtract => Token::Minus,
            Self::Multiply => Token::Mult,
            Self::Divide => Token::Div,
            Self::Equal => Token::Equal,
            Self::NotEqual => Token::NotEqual,
            Self::Greater => Token::GreaterThan,
            Self::Less => Token::LessThan,
        }
    }

    pub fn is_comparison(&self) -> bool {
        self.token().is_comparison()
    }

    /// ASCII spelling for messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
        }
    }
}

// infix -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: InfixOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Infix {
    pub fn new(operator: InfixOperator, left: Expression, right: Expression) -> Self {
        let location = left.location().merge(right.location());

        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location
        }
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.token().as_literal(), self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Negate,
    Not,
}

// prefix -> (➖ | 🚫) <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: PrefixOperator,
    pub expression: Box<Expression>,
    pub location: SrcSpan
}

impl Prefix {
    pub fn new(operator: PrefixOperator, start: u32, expression: Expression) -> Self {
        let end = expression.location().end;

        Self {
            operator,
            expression: Box::new(expression),
            location: SrcSpan { start, end }
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            PrefixOperator::Negate => write!(f, "{}{}", Token::Minus.as_literal(), self.expression),
            PrefixOperator::Not => write!(f, "{} {}", Token::Not.as_literal(), self.expression)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

// logical -> <expression> (🤝 | 🎭) <expression>, right side evaluated lazily
#[derive(Debug, Clone, PartialEq)]
pub struct Logical {
    pub left: Box<Expression>,
    pub operator: LogicalOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Logical {
    pub fn new(operator: LogicalOperator, left: Expression, right: Expression) -> Self {
        let location = left.location().merge(right.location());

        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location
        }
    }
}

impl Display for Logical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self.operator {
            LogicalOperator::And => Token::And,
            LogicalOperator::Or => Token::Or,
        };

        write!(f, "({} {} {})", self.left, operator.as_literal(), self.right)
    }
}

// range -> 🔢 <expression> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub start: Box<Expression>,
    pub end: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Range {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start_pos = parser.expect_one(Token::Range)?.start;

        let start = Expression::parse(parser)?;
        let end = Expression::parse(parser)?;
        let end_pos = end.location().end;

        Ok(Self {
            start: Box::new(start),
            end: Box::new(end),
            location: SrcSpan { start: start_pos, end: end_pos }
        })
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", Token::Range.as_literal(), self.start, self.end)
    }
}

// input -> 📝 [ <string> ]
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub prompt: Option<Box<Expression>>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Input {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let mut location = parser.expect_one(Token::Input)?;

        let prompt = match parser.current() {
            Token::Str(value) => {
                let prompt = Primitive::Str {
                    value: value.clone(),
                    location: parser.current_span()
                };
                location = location.merge(prompt.location());
                parser.step();

                Some(Box::new(Expression::Primitive(prompt)))
            },
            _ => None
        };

        Ok(Self {
            prompt,
            location
        })
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prompt {
            Some(prompt) => write!(f, "{} {}", Token::Input.as_literal(), prompt),
            None => write!(f, "{}", Token::Input.as_literal())
        }
    }
}

// random -> 🎲 <expression> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Random {
    pub min: Box<Expression>,
    pub max: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Random {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = parser.expect_one(Token::Random)?.start;

        let min = Expression::parse(parser)?;
        let max = Expression::parse(parser)?;
        let end = max.location().end;

        Ok(Self {
            min: Box::new(min),
            max: Box::new(max),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", Token::Random.as_literal(), self.min, self.max)
    }
}

// call -> <expression> "(" { <expression> } ")"
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub location: SrcSpan
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self.arguments.iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.callee, arguments.join(" "))
    }
}

// primitive -> <string> | <float> | <int> | <bool>
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Int {
        value: i64,
        location: SrcSpan
    },
    Float {
        value: f64,
        location: SrcSpan
    },
    Str {
        value: String,
        location: SrcSpan
    },
    Bool {
        value: bool,
        location: SrcSpan
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int { value, .. } => write!(f, "{value}"),
            Self::Float { value, .. } => write!(f, "{value:?}"),
            Self::Str { value, .. } => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");

                write!(f, "\"{escaped}\"")
            },
            Self::Bool { value: true, .. } => write!(f, "{}", Token::True.as_literal()),
            Self::Bool { value: false, .. } => write!(f, "{}", Token::False.as_literal())
        }
    }
}

impl Primitive {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Int { location, .. } |
            Self::Float { location, .. } |
            Self::Str { location, .. } |
            Self::Bool { location, .. } => *location
        }
    }
}
