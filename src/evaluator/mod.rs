
use crate::ast::{self, Expression, Node, Operator, Statement};
use crate::builtins;
use crate::environment::Environment;
use crate::object::{EvalError, FunctionObject, HashKey, HashValue, Object, Result};
use log::trace;
use std::convert::TryFrom;
use std::ops::ControlFlow;

// A `return` inside an `if` that is used as an operand comes back as a
// `ReturnValue`; it goes straight back to the enclosing block unused.
macro_rules! operand {
    ($value:expr) => {
        match $value? {
            signal @ Object::ReturnValue(_) => return Ok(signal),
            obj => obj,
        }
    };
}

macro_rules! operands {
    ($values:expr) => {
        match $values? {
            ControlFlow::Continue(values) => values,
            ControlFlow::Break(signal) => return Ok(signal),
        }
    };
}

pub fn eval(node: Node, env: &Environment) -> Result<Object> {
    match node {
        Node::Program(program) => eval_program(program, env),
        Node::Statement(stmt) => eval_statement(stmt, env),
        Node::Expression(expr) => eval_expression(expr, env),
    }
}

/// Runs the top-level statements. A `return` stops the program and its value
/// becomes the result.
pub fn eval_program(program: &ast::Program, env: &Environment) -> Result<Object> {
    let mut result = Object::Null;

    for stmt in program.statements.iter() {
        result = eval_statement(stmt, env)?;
        if result.is_return_value() {
            return Ok(result.unwrap_return());
        }
    }

    Ok(result)
}

// Unlike a program, a block hands the return marker on to whoever is
// applying the enclosing function.
fn eval_block_statement(block: &ast::BlockStatement, env: &Environment) -> Result<Object> {
    let mut result = Object::Null;

    for stmt in block.statements.iter() {
        result = eval_statement(stmt, env)?;
        if result.is_return_value() {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(stmt: &Statement, env: &Environment) -> Result<Object> {
    match stmt {
        Statement::Expr(stmt) => eval_expression(&stmt.expression, env),
        Statement::Let(stmt) => {
            let value = operand!(eval_expression(&stmt.value, env));
            env.set(&stmt.name.value, value.clone());
            Ok(value)
        }
        Statement::Return(stmt) => {
            let value = operand!(eval_expression(&stmt.return_value, env));
            Ok(Object::ReturnValue(Box::new(value)))
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expr: &Expression, env: &Environment) -> Result<Object> {
    match expr {
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::IntegerLiteral(n) => Ok(Object::Integer(*n)),
        Expression::Boolean(b) => Ok(Object::Boolean(b.0)),
        Expression::String(s) => Ok(Object::String(s.clone())),
        Expression::Prefix(prefix) => {
            let right = operand!(eval_expression(&prefix.right, env));
            eval_prefix_expression(prefix.operator, right)
        }
        Expression::Infix(infix) => {
            let left = operand!(eval_expression(&infix.left, env));
            let right = operand!(eval_expression(&infix.right, env));
            eval_infix_expression(infix.operator, left, right)
        }
        Expression::If(if_expr) => {
            let condition = operand!(eval_expression(&if_expr.condition, env));
            if condition.truth_value() {
                eval_block_statement(&if_expr.consequence, env)
            } else if let Some(alternative) = &if_expr.alternative {
                eval_block_statement(alternative, env)
            } else {
                Ok(Object::Null)
            }
        }
        Expression::Function(func) => Ok(Object::Function(FunctionObject {
            parameters: func.parameters.clone(),
            body: func.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(call) => {
            let function = operand!(eval_expression(&call.function, env));
            apply_function(function, &call.arguments, env)
        }
        Expression::Array(array) => Ok(Object::Array(operands!(eval_expressions(
            &array.elements,
            env
        )))),
        Expression::Hash(hash) => eval_hash_literal(hash, env),
        Expression::Index(index) => {
            let left = operand!(eval_expression(&index.left, env));
            let index = operand!(eval_expression(&index.index, env));
            eval_index_expression(left, index)
        }
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Result<Object> {
    env.get(name)
        .or_else(|| builtins::lookup(name))
        .ok_or_else(|| EvalError::IdentifierNotFound {
            id: name.to_owned(),
        })
}

/// Left to right, stopping at the first error or `return`.
fn eval_expressions(
    exprs: &[Expression],
    env: &Environment,
) -> Result<ControlFlow<Object, Vec<Object>>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs.iter() {
        let value = eval_expression(expr, env)?;
        if value.is_return_value() {
            return Ok(ControlFlow::Break(value));
        }
        values.push(value);
    }

    Ok(ControlFlow::Continue(values))
}

fn apply_function(
    function: Object,
    arguments: &[Expression],
    env: &Environment,
) -> Result<Object> {
    match function {
        Object::Function(func) => {
            let args = operands!(eval_expressions(arguments, env));
            trace!("applying fn with {} arguments", args.len());

            let extended_env = Environment::with_enclosed(&func.env);
            // Missing arguments leave their parameters unbound.
            for (param, arg) in func.parameters.iter().zip(args.into_iter()) {
                extended_env.set(&param.value, arg);
            }

            Ok(eval_block_statement(&func.body, &extended_env)?.unwrap_return())
        }
        Object::Builtin(builtin) => {
            let args = operands!(eval_expressions(arguments, env));
            builtin.call(args)
        }
        obj => Err(EvalError::NotAFunction {
            type_name: obj.type_name(),
        }),
    }
}

fn eval_prefix_expression(operator: Operator, right: Object) -> Result<Object> {
    match (operator, right) {
        (Operator::Bang, right) => Ok(Object::Boolean(!right.truth_value())),
        (Operator::Minus, Object::Integer(n)) => Ok(Object::Integer(n.wrapping_neg())),
        (operator, right) => Err(EvalError::UnknownPrefixOperator {
            operator,
            operand: right.type_name(),
        }),
    }
}

fn eval_infix_expression(operator: Operator, left: Object, right: Object) -> Result<Object> {
    match (left, right) {
        (Object::Integer(x), Object::Integer(y)) => eval_integer_infix_expression(operator, x, y),
        (Object::String(x), Object::String(y)) => eval_string_infix_expression(operator, x, y),
        (left, right) => match operator {
            Operator::Eq => Ok(Object::Boolean(left == right)),
            Operator::NotEq => Ok(Object::Boolean(left != right)),
            _ => Err(EvalError::binary_op_error(
                left.type_name(),
                operator,
                right.type_name(),
            )),
        },
    }
}

fn eval_integer_infix_expression(operator: Operator, left: i64, right: i64) -> Result<Object> {
    Ok(match operator {
        Operator::Plus => Object::Integer(left.wrapping_add(right)),
        Operator::Minus => Object::Integer(left.wrapping_sub(right)),
        Operator::Asterisk => Object::Integer(left.wrapping_mul(right)),
        Operator::Slash if right == 0 => return Err(EvalError::DivisionByZero),
        Operator::Slash => Object::Integer(left.wrapping_div(right)),
        Operator::LT => Object::Boolean(left < right),
        Operator::GT => Object::Boolean(left > right),
        Operator::Eq => Object::Boolean(left == right),
        Operator::NotEq => Object::Boolean(left != right),
        op => return Err(EvalError::binary_op_error("INTEGER", op, "INTEGER")),
    })
}

fn eval_string_infix_expression(operator: Operator, left: String, right: String) -> Result<Object> {
    match operator {
        Operator::Plus => Ok(Object::String(left + &right)),
        op => Err(EvalError::binary_op_error("STRING", op, "STRING")),
    }
}

// Duplicate keys: the last pair wins.
fn eval_hash_literal(hash: &ast::HashLiteral, env: &Environment) -> Result<Object> {
    let mut values = HashValue::default();

    for (key_expr, value_expr) in hash.pairs.iter() {
        let key = HashKey::try_from(operand!(eval_expression(key_expr, env)))?;
        let value = operand!(eval_expression(value_expr, env));
        values.values.insert(key, value);
    }

    Ok(values.into())
}

fn eval_index_expression(left: Object, index: Object) -> Result<Object> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(i)
            .ok()
            .and_then(|i| elements.into_iter().nth(i))
            .unwrap_or_default()),
        (Object::Hash(hash), index) => Ok(hash.get(&HashKey::try_from(index)?)),
        (left, _) => Err(EvalError::NotIndexable {
            type_name: left.type_name(),
        }),
    }
}
