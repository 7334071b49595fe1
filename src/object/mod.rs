use crate::ast;
use crate::builtins::Builtin;
use crate::environment::Environment;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

mod eval_error;
pub use eval_error::EvalError;

mod hash;
pub use hash::HashKey;

/// Evaluation result. The `Err` side is the language's Error value: it
/// short-circuits every enclosing construct through `?`.
pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Function(FunctionObject),
    Builtin(Builtin),
    ReturnValue(Box<Object>),
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Vec<Object>),
    Hash(HashValue),
    Null,
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Function(func) => write!(f, "{}", func),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(obj) => write!(f, "{}", obj),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{}", s),
            Self::Array(a) => {
                let element_names: Vec<String> = a.iter().map(Object::to_string).collect();

                write!(f, "[{}]", element_names.join(", "))
            }
            Self::Hash(h) => write!(f, "{}", h),
            Self::Null => write!(f, "null"),
        }
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::Null
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        s.to_owned().into()
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a)
    }
}

impl From<HashValue> for Object {
    fn from(h: HashValue) -> Self {
        Self::Hash(h)
    }
}

impl Object {
    pub fn is_return_value(&self) -> bool {
        matches!(self, Self::ReturnValue(_))
    }

    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(o) => *o,
            obj => obj,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(o) => o.type_name(),
            Self::Boolean(_) => "BOOLEAN",
            Self::Integer(_) => "INTEGER",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Null => "NULL",
        }
    }

    pub fn truth_value(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }
}

/// A closure: the literal's parameters and body plus the environment that was
/// active where the literal was evaluated.
#[derive(Debug, Clone)]
pub struct FunctionObject {
    pub parameters: Vec<ast::Identifier>,
    pub body: ast::BlockStatement,
    pub env: Environment,
}

impl PartialEq for FunctionObject {
    fn eq(&self, other: &Self) -> bool {
        self.env.ptr_eq(&other.env)
            && self.parameters == other.parameters
            && self.body == other.body
    }
}

impl Display for FunctionObject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let identifier_names: Vec<String> = self
            .parameters
            .iter()
            .map(ast::Identifier::to_string)
            .collect();

        write!(f, "fn({}) {}", identifier_names.join(", "), self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashValue {
    pub values: HashMap<HashKey, Object>,
}

impl HashValue {
    pub fn get(&self, key: &HashKey) -> Object {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

impl FromIterator<(HashKey, Object)> for HashValue {
    fn from_iter<I: IntoIterator<Item = (HashKey, Object)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Display for HashValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let pair_names: Vec<String> = self
            .values
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();

        write!(f, "{{{}}}", pair_names.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_inspect() {
        let cases = vec![
            (Object::Integer(-3), "-3"),
            (Object::Boolean(true), "true"),
            (Object::from("raw text"), "raw text"),
            (Object::Null, "null"),
            (
                Object::Array(vec![1.into(), "two".into(), Object::Null, Object::Array(vec![])]),
                "[1, two, null, []]",
            ),
            (
                Object::ReturnValue(Box::new(Object::Integer(7))),
                "7",
            ),
            (
                vec![(HashKey::from("a"), Object::Integer(1))]
                    .into_iter()
                    .collect::<HashValue>()
                    .into(),
                "{a: 1}",
            ),
        ];

        for (object, expected) in cases.into_iter() {
            assert_eq!(object.to_string(), expected);
        }
    }

    #[test]
    fn test_function_inspect() {
        let func = Object::Function(FunctionObject {
            parameters: vec!["x".into()],
            body: ast::BlockStatement {
                statements: vec![ast::Statement::Expr(ast::ExpressionStatement {
                    expression: ast::Expression::Infix(ast::InfixExpression {
                        left: Box::new(ast::Expression::Identifier("x".into())),
                        operator: ast::Operator::Plus,
                        right: Box::new(ast::Expression::IntegerLiteral(2)),
                    }),
                })],
            },
            env: Environment::new(),
        });

        assert_eq!(func.to_string(), "fn(x) { (x + 2) }");
        assert_eq!(func.type_name(), "FUNCTION");
    }

    #[test]
    fn test_function_equality_needs_same_environment() {
        let env = Environment::new();
        let make = |env: &Environment| FunctionObject {
            parameters: vec![],
            body: Default::default(),
            env: env.clone(),
        };

        assert_eq!(make(&env), make(&env));
        assert_ne!(make(&env), make(&Environment::new()));
    }

    #[test]
    fn test_truth_value() {
        assert!(!Object::Boolean(false).truth_value());
        assert!(!Object::Null.truth_value());
        assert!(Object::Boolean(true).truth_value());
        assert!(Object::Integer(0).truth_value());
        assert!(Object::from("").truth_value());
        assert!(Object::Array(vec![]).truth_value());
    }

    #[test]
    fn test_hash_lookup_defaults_to_null() {
        let hash: HashValue = vec![(HashKey::Integer(1), Object::from("one"))]
            .into_iter()
            .collect();

        assert_eq!(hash.get(&HashKey::Integer(1)), Object::from("one"));
        assert_eq!(hash.get(&HashKey::Boolean(true)), Object::Null);
    }
}
