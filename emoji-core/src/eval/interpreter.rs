use std::{
    collections::HashMap,
    rc::Rc,
    sync::{atomic::{AtomicBool, Ordering}, Arc},
    time::{Duration, Instant}
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    environment::prelude::{FunctionValue, ScopeChain, Value},
    parser::prelude::{
        Assignment, Call, Expression, Function, Identifier, Input, LogicalOperator, Module,
        Primitive, Random, Range, Statement
    },
    utils::prelude::{ConsoleIO, SrcSpan, StdConsoleIO}
};

use super::{
    error::{RuntimeError, RuntimeErrorType},
    operators::{apply_infix, apply_prefix},
    translate::Translator
};

/// Words that may not be declared with `📦`, compared without case.
pub const RESERVED_NAMES: &[&str] = &[
    "print", "if", "else", "while", "repeat", "def", "return", "true",
    "false", "and", "or", "not", "input", "random", "range", "timer",
];

/// Calls that may be active at once. Every call costs native stack, so the
/// limit keeps deep recursion inside the default 2 MiB thread stack.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Reject `📦` of a name already bound in the current frame.
    pub strict: bool,
    /// Fixed seed for `🎲`. Entropy is used when absent.
    pub seed: Option<u64>,
    pub max_call_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            strict: true,
            seed: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerReading {
    Started,
    Elapsed(Duration),
}

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal(Value),
    /// A `⬅️` was executed; the rest of the enclosing body is skipped.
    Return(Value),
}

pub struct Interpreter {
    options: InterpreterOptions,
    scopes: ScopeChain,
    call_depth: usize,
    timer: Option<Instant>,
    translator: Translator,
    console: Rc<dyn ConsoleIO>,
    rng: StdRng,
    interrupt: Arc<AtomicBool>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(InterpreterOptions::default(), Rc::new(StdConsoleIO))
    }
}

impl Interpreter {
    pub fn new(options: InterpreterOptions, console: Rc<dyn ConsoleIO>) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            options,
            scopes: ScopeChain::new(options.strict),
            call_depth: 0,
            timer: None,
            translator: Translator::default(),
            console,
            rng,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    /// Shares an externally owned stop flag, e.g. one set from a signal handler.
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupt.clone()
    }

    pub fn clear_interrupt(&self) {
        self.interrupt.store(false, Ordering::SeqCst);
    }

    pub fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    /// Runs every statement of the module and returns the value of the
    /// last one. A `⬅️` that reaches the top level is an error.
    pub fn run(&mut self, module: &Module) -> Result<Value, RuntimeError> {
        let mut last = Value::Unit;

        for statement in &module.program.statements {
            match self.exec_statement(statement)? {
                Flow::Normal(value) => last = value,
                Flow::Return(_) => {
                    return Err(RuntimeErrorType::ReturnOutsideFunction.at(statement.location()))
                },
            }
        }

        Ok(last)
    }

    pub fn exec_block(&mut self, block: &[Statement]) -> Result<Flow, RuntimeError> {
        let mut last = Value::Unit;

        for statement in block {
            match self.exec_statement(statement)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }

        Ok(Flow::Normal(last))
    }

    fn check_interrupt(&self, location: SrcSpan) -> Result<(), RuntimeError> {
        match self.interrupt.load(Ordering::SeqCst) {
            true => Err(RuntimeErrorType::Interrupted.at(location)),
            false => Ok(()),
        }
    }

    pub fn exec_statement(&mut self, statement: &Statement) -> Result<Flow, RuntimeError> {
        self.check_interrupt(statement.location())?;

        match statement {
            Statement::Assignment(assignment) => self.exec_assignment(assignment).map(Flow::Normal),
            Statement::Output(output) => {
                let line = match self.eval_expression(&output.expression)? {
                    Value::String { value } => self.translator.translate(&value),
                    value => value.to_string(),
                };

                self.write_line(&line, output.location)?;

                Ok(Flow::Normal(Value::Unit))
            },
            Statement::Conditional(conditional) => {
                if self.eval_expression(&conditional.condition)?.is_truthy() {
                    return self.exec_block(&conditional.resolution);
                }

                match &conditional.alternative {
                    Some(alternative) => self.exec_block(alternative),
                    None => Ok(Flow::Normal(Value::Unit)),
                }
            },
            Statement::ConditionalLoop(loop_) => {
                let mut last = Value::Unit;

                loop {
                    self.check_interrupt(loop_.location)?;

                    if !self.eval_expression(&loop_.condition)?.is_truthy() {
                        break;
                    }

                    match self.exec_block(&loop_.block)? {
                        Flow::Normal(value) => last = value,
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }

                Ok(Flow::Normal(last))
            },
            Statement::FixedLoop(loop_) => {
                // the count is read once, before the first iteration
                let count = self.eval_expression(&loop_.count)?;
                let count = count.to_int()
                    .ok_or(RuntimeErrorType::ExpectedInteger {
                        context: "🔂 count",
                        found: count._type(),
                    })
                    .map_err(|err| err.at(loop_.count.location()))?;

                let mut last = Value::Unit;

                for _ in 0..count.max(0) {
                    self.check_interrupt(loop_.location)?;

                    match self.exec_block(&loop_.block)? {
                        Flow::Normal(value) => last = value,
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }

                Ok(Flow::Normal(last))
            },
            Statement::Function(function) => {
                self.define_function(function);

                Ok(Flow::Normal(Value::Unit))
            },
            Statement::Return(return_) => {
                let value = self.eval_expression(&return_.value)?;

                Ok(Flow::Return(value))
            },
            Statement::Timer { location } => match self.toggle_timer() {
                TimerReading::Started => Ok(Flow::Normal(Value::from("started"))),
                TimerReading::Elapsed(elapsed) => {
                    let seconds = elapsed.as_secs_f64();
                    self.write_line(&format!("⏱️ {seconds:.3}s"), *location)?;

                    Ok(Flow::Normal(Value::Float { value: seconds }))
                }
            },
            Statement::Expression(expression) => self.eval_expression(expression).map(Flow::Normal),
        }
    }

    fn exec_assignment(&mut self, assignment: &Assignment) -> Result<Value, RuntimeError> {
        let value = self.eval_expression(&assignment.value)?;
        let Identifier { value: name, location } = &assignment.identifier;

        if assignment.declaration {
            validate_name(name).map_err(|err| err.at(*location))?;

            self.scopes.declare(name.clone(), value.clone())
                .map_err(|err| err.at(*location))?;
        } else {
            self.scopes.assign(name.clone(), value.clone());
        }

        Ok(value)
    }

    /// Functions always land in the global frame, wherever they are defined.
    fn define_function(&mut self, function: &Function) {
        let value = FunctionValue {
            name: function.name.value.clone(),
            params: function.params.iter().map(|param| param.value.clone()).collect(),
            body: function.body.clone(),
        };

        self.scopes.define_global(
            function.name.value.clone(),
            Value::Function { value: Rc::new(value) }
        );
    }

    /// Flips between arming the timer and reading the time since it was armed.
    pub fn toggle_timer(&mut self) -> TimerReading {
        match self.timer.take() {
            Some(start) => TimerReading::Elapsed(start.elapsed()),
            None => {
                self.timer = Some(Instant::now());
                TimerReading::Started
            }
        }
    }

    fn write_line(&self, line: &str, location: SrcSpan) -> Result<(), RuntimeError> {
        self.console.write_line(line)
            .map_err(|err| RuntimeErrorType::from(err).at(location))
    }

    pub fn eval_expression(&mut self, expression: &Expression) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Identifier(ident) => self.scopes.lookup(&ident.value)
                .map_err(|err| err.at(ident.location)),
            Expression::Primitive(primitive) => Ok(match primitive {
                Primitive::Int { value, .. } => Value::Integer { value: *value },
                Primitive::Float { value, .. } => Value::Float { value: *value },
                Primitive::Str { value, .. } => Value::String { value: value.clone() },
                Primitive::Bool { value, .. } => Value::Boolean { value: *value },
            }),
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left)?;
                let right = self.eval_expression(&infix.right)?;

                apply_infix(infix.operator, left, right)
                    .map_err(|err| err.at(infix.location))
            },
            Expression::Prefix(prefix) => {
                let operand = self.eval_expression(&prefix.expression)?;

                apply_prefix(prefix.operator, operand)
                    .map_err(|err| err.at(prefix.location))
            },
            Expression::Logical(logical) => {
                let left = self.eval_expression(&logical.left)?;

                // the right side only runs when the left one does not decide
                match (logical.operator, left.is_truthy()) {
                    (LogicalOperator::And, false) => Ok(Value::from(false)),
                    (LogicalOperator::Or, true) => Ok(Value::from(true)),
                    _ => self.eval_expression(&logical.right),
                }
            },
            Expression::Range(range) => self.eval_range(range),
            Expression::Input(input) => self.eval_input(input),
            Expression::Random(random) => self.eval_random(random),
            Expression::Call(call) => self.eval_call(call),
        }
    }

    fn eval_int(&mut self, expression: &Expression, context: &'static str) -> Result<i64, RuntimeError> {
        let value = self.eval_expression(expression)?;

        value.to_int()
            .ok_or(RuntimeErrorType::ExpectedInteger { context, found: value._type() })
            .map_err(|err| err.at(expression.location()))
    }

    fn eval_range(&mut self, range: &Range) -> Result<Value, RuntimeError> {
        let start = self.eval_int(&range.start, "🔢 bounds")?;
        let end = self.eval_int(&range.end, "🔢 bounds")?;

        Ok(Value::List {
            values: (start..=end).map(Value::from).collect()
        })
    }

    fn eval_random(&mut self, random: &Random) -> Result<Value, RuntimeError> {
        let min = self.eval_int(&random.min, "🎲 bounds")?;
        let max = self.eval_int(&random.max, "🎲 bounds")?;

        if min > max {
            return Err(RuntimeErrorType::EmptyRange { min, max }.at(random.location));
        }

        Ok(Value::Integer { value: self.rng.gen_range(min..=max) })
    }

    fn eval_input(&mut self, input: &Input) -> Result<Value, RuntimeError> {
        if let Some(prompt) = &input.prompt {
            let text = match self.eval_expression(prompt)? {
                Value::String { value } => self.translator.translate_prompt(&value).to_string(),
                value => value.to_string(),
            };

            self.console.prompt(&text)
                .map_err(|err| RuntimeErrorType::from(err).at(input.location))?;
        }

        match self.console.read_line() {
            Ok(Some(line)) => Ok(parse_input(&line)),
            Ok(None) => Err(RuntimeErrorType::EndOfInput.at(input.location)),
            Err(err) => Err(RuntimeErrorType::from(err).at(input.location)),
        }
    }

    fn eval_call(&mut self, call: &Call) -> Result<Value, RuntimeError> {
        let function = match self.eval_expression(&call.callee)? {
            Value::Function { value } => value,
            other => return Err(RuntimeErrorType::NotCallable { found: other._type() }.at(call.location)),
        };

        let arguments = call.arguments.iter()
            .map(|argument| self.eval_expression(argument))
            .collect::<Result<Vec<Value>, RuntimeError>>()?;

        if arguments.len() != function.params.len() {
            return Err(RuntimeErrorType::ArityMismatch {
                expected: function.params.len(),
                got: arguments.len(),
            }.at(call.location));
        }

        if self.call_depth >= self.options.max_call_depth {
            return Err(RuntimeErrorType::RecursionLimit {
                limit: self.options.max_call_depth,
            }.at(call.location));
        }

        let frame = function.params.iter()
            .cloned()
            .zip(arguments)
            .collect::<HashMap<String, Value>>();

        self.call_depth += 1;
        self.scopes.push_frame(frame);
        let result = self.exec_block(&function.body);
        self.scopes.pop_frame();
        self.call_depth -= 1;

        match result? {
            Flow::Normal(_) => Ok(Value::Unit),
            Flow::Return(value) => Ok(value),
        }
    }
}

/// Reads a trimmed input line as an integer, then a float, then plain text.
pub fn parse_input(line: &str) -> Value {
    let trimmed = line.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);

    if !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()) {
        if let Ok(value) = trimmed.parse::<i64>() {
            return Value::Integer { value };
        }
    }

    match trimmed.parse::<f64>() {
        Ok(value) => Value::Float { value },
        Err(_) => Value::String { value: trimmed.to_string() },
    }
}

/// Checks that a declared name is a word or a single glyph, and not reserved.
pub fn validate_name(name: &str) -> Result<(), RuntimeErrorType> {
    if !is_identifier(name) {
        return Err(RuntimeErrorType::InvalidIdentifier { name: name.to_string() });
    }

    if RESERVED_NAMES.iter().any(|reserved| reserved.eq_ignore_ascii_case(name)) {
        return Err(RuntimeErrorType::ReservedIdentifier { name: name.to_string() });
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        },
        Some(first) if !first.is_ascii() => {
            matches!(chars.as_str(), "" | "\u{FE0F}")
        },
        _ => false,
    }
}
