use std::cmp::Ordering;

use crate::{
    environment::prelude::Value,
    parser::prelude::{InfixOperator, PrefixOperator}
};

use super::error::RuntimeErrorType;

/// Applies a binary operator to two evaluated operands.
///
/// Comparisons never fail: operands without a common equality are unequal
/// and operands without a common order are neither greater nor less.
/// Arithmetic on anything but numbers (or `➕` on two strings) is an error.
pub fn apply_infix(operator: InfixOperator, left: Value, right: Value) -> Result<Value, RuntimeErrorType> {
    match operator {
        InfixOperator::Equal => Ok(left.loose_eq(&right).into()),
        InfixOperator::NotEqual => Ok((!left.loose_eq(&right)).into()),
        InfixOperator::Greater => Ok((left.loose_cmp(&right) == Some(Ordering::Greater)).into()),
        InfixOperator::Less => Ok((left.loose_cmp(&right) == Some(Ordering::Less)).into()),
        InfixOperator::Add
        | InfixOperator::Subtract
        | InfixOperator::Multiply
        | InfixOperator::Divide => arithmetic(operator, left, right),
    }
}

fn arithmetic(operator: InfixOperator, left: Value, right: Value) -> Result<Value, RuntimeErrorType> {
    match (left, right) {
        (
            Value::Integer { value: left_value },
            Value::Integer { value: right_value }
        ) => integer_arithmetic(operator, left_value, right_value),
        (
            Value::String { value: left_value },
            Value::String { value: right_value }
        ) if operator == InfixOperator::Add => Ok(Value::String { value: left_value + &right_value }),
        (left, right) => match (left.as_number(), right.as_number()) {
            (Some(left_value), Some(right_value)) => float_arithmetic(operator, left_value, right_value),
            _ => Err(RuntimeErrorType::InvalidOperands {
                operator: operator.symbol(),
                left: left._type(),
                right: right._type(),
            })
        }
    }
}

fn integer_arithmetic(operator: InfixOperator, left: i64, right: i64) -> Result<Value, RuntimeErrorType> {
    let overflow = || RuntimeErrorType::IntegerOverflow { operator: operator.symbol() };

    let value = match operator {
        InfixOperator::Add => left.checked_add(right).ok_or_else(overflow)?,
        InfixOperator::Subtract => left.checked_sub(right).ok_or_else(overflow)?,
        InfixOperator::Multiply => left.checked_mul(right).ok_or_else(overflow)?,
        // division is always true division
        _ => return float_arithmetic(operator, left as f64, right as f64),
    };

    Ok(Value::Integer { value })
}

fn float_arithmetic(operator: InfixOperator, left: f64, right: f64) -> Result<Value, RuntimeErrorType> {
    let value = match operator {
        InfixOperator::Add => left + right,
        InfixOperator::Subtract => left - right,
        InfixOperator::Multiply => left * right,
        InfixOperator::Divide if right == 0.0 => return Err(RuntimeErrorType::DivisionByZero),
        InfixOperator::Divide => left / right,
        _ => return Err(RuntimeErrorType::InvalidOperands {
            operator: operator.symbol(),
            left: Value::from(left)._type(),
            right: Value::from(right)._type(),
        }),
    };

    Ok(Value::Float { value })
}

pub fn apply_prefix(operator: PrefixOperator, operand: Value) -> Result<Value, RuntimeErrorType> {
    match (operator, operand) {
        (PrefixOperator::Not, operand) => Ok((!operand.is_truthy()).into()),
        (PrefixOperator::Negate, Value::Integer { value }) => value.checked_neg()
            .map(Value::from)
            .ok_or(RuntimeErrorType::IntegerOverflow { operator: "-" }),
        (PrefixOperator::Negate, Value::Float { value }) => Ok(Value::Float { value: -value }),
        (PrefixOperator::Negate, operand) => Err(RuntimeErrorType::InvalidOperand {
            operator: "-",
            operand: operand._type(),
        }),
    }
}
