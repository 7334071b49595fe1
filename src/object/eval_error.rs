use crate::ast;
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EvalError

    IdentifierNotFound{id: String} = "identifier not found: {id}",
    UnknownPrefixOperator{operator: ast::Operator, operand: &'static str} = "unknown operator: {operator}{operand}",
    UnknownInfixOperator{left: &'static str, operator: ast::Operator, right: &'static str} = "unknown operator: {left} {operator} {right}",
    TypeMismatch{left: &'static str, operator: ast::Operator, right: &'static str} = "type mismatch: {left} {operator} {right}",
    DivisionByZero = "division by zero",
    NotAFunction{type_name: &'static str} = "not a function: {type_name}",
    UnsupportedArgType{fn_name: &'static str, type_name: &'static str} = "argument to `{fn_name}` not supported, got {type_name}",
    UnsupportedArgTypes{fn_name: &'static str, first: &'static str, second: &'static str} = "argument to `{fn_name}` not supported, got {first}, {second}",
    IncorrectArity{got: usize, want: usize} = "wrong number of arguments. got={got}, want={want}",
    NotIndexable{type_name: &'static str} = "index operator not supported: {type_name}",
    NotHashable{type_name: &'static str} = "unusable as hash key: {type_name}",
}

impl EvalError {
    /// Operands of one type with no rule for the operator are an unknown
    /// operator; operands of different types are a mismatch.
    pub fn binary_op_error(
        left: &'static str,
        operator: ast::Operator,
        right: &'static str,
    ) -> Self {
        if left == right {
            Self::UnknownInfixOperator {
                left,
                operator,
                right,
            }
        } else {
            Self::TypeMismatch {
                left,
                operator,
                right,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_binary_op_error() {
        assert_eq!(
            EvalError::binary_op_error("BOOLEAN", ast::Operator::Plus, "BOOLEAN").to_string(),
            "unknown operator: BOOLEAN + BOOLEAN"
        );
        assert_eq!(
            EvalError::binary_op_error("INTEGER", ast::Operator::Minus, "STRING").to_string(),
            "type mismatch: INTEGER - STRING"
        );
    }
}
