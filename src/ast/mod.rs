mod expression;
mod statement;
pub use expression::*;
pub use statement::*;

use std::fmt::{Display, Formatter};

/// Any AST node the evaluator can be pointed at.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// Statements are space separated. A bare expression statement needs a `;`
/// when something follows it, otherwise the next statement could be read as
/// a continuation of the expression.
pub(crate) fn write_statements(f: &mut Formatter, statements: &[Statement]) -> std::fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", stmt)?;
        if let Statement::Expr(_) = stmt {
            if i + 1 < statements.len() {
                write!(f, ";")?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ident(name: &str) -> Box<Expression> {
        Box::new(Expression::Identifier(name.into()))
    }

    #[test]
    fn test_display() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                name: "myVar".into(),
                value: Expression::Identifier("anotherVar".into()),
            })],
        };

        assert_eq!(format!("{}", program), "let myVar = anotherVar;");
    }

    #[test]
    fn test_statement_separators() {
        let program = Program {
            statements: vec![
                Statement::Expr(ExpressionStatement {
                    expression: Expression::IntegerLiteral(1),
                }),
                Statement::Return(ReturnStatement {
                    return_value: Expression::Infix(InfixExpression {
                        left: ident("a"),
                        operator: Operator::Plus,
                        right: ident("b"),
                    }),
                }),
                Statement::Expr(ExpressionStatement {
                    expression: Expression::String("done".to_owned()),
                }),
            ],
        };

        assert_eq!(program.to_string(), "1; return (a + b); \"done\"");
    }

    #[test]
    fn test_function_display() {
        let function = Expression::Function(FunctionLiteral {
            parameters: vec!["x".into(), "y".into()],
            body: BlockStatement {
                statements: vec![Statement::Expr(ExpressionStatement {
                    expression: Expression::Index(IndexExpression {
                        left: ident("x"),
                        index: ident("y"),
                    }),
                })],
            },
        });

        assert_eq!(function.to_string(), "fn(x, y) { (x[y]) }");
    }

    #[test]
    fn test_if_display() {
        let conditional = Expression::If(IfExpression {
            condition: Box::new(Expression::Boolean(true.into())),
            consequence: BlockStatement::default(),
            alternative: Some(BlockStatement {
                statements: vec![Statement::Expr(ExpressionStatement {
                    expression: Expression::Prefix(PrefixExpression {
                        operator: Operator::Minus,
                        right: Box::new(Expression::IntegerLiteral(5)),
                    }),
                })],
            }),
        });

        assert_eq!(conditional.to_string(), "if (true) { } else { (-5) }");
    }

    #[test]
    fn test_collection_display() {
        let hash = Expression::Hash(
            vec![
                (Expression::String("one".to_owned()), Expression::IntegerLiteral(1)),
                (Expression::Boolean(false.into()), Expression::Array(ArrayLiteral { elements: vec![] })),
            ]
            .into(),
        );

        assert_eq!(hash.to_string(), "{\"one\":1, false:[]}");

        let call = Expression::Call(CallExpression {
            function: ident("add"),
            arguments: vec![Expression::IntegerLiteral(1), *ident("x")],
        });

        assert_eq!(call.to_string(), "add(1, x)");
    }
}
