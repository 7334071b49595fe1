mod error;
mod precedence;

pub use error::ParseError;
pub use precedence::Precedence;

use crate::ast::{self, Expression, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use log::debug;

pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Self {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
        }
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Parses until end of input. Statements that fail to parse are skipped
    /// and their diagnostics collected in [`Parser::errors`].
    pub fn parse_program(&mut self) -> ast::Program {
        let mut program = ast::Program::default();

        while !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt)
            }
            self.next_token();
        }

        program
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn parse(mut self) -> Result<ast::Program, Vec<ParseError>> {
        let program = self.parse_program();

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token {
            Token::Let => self.parse_let_statement().map(Statement::Let),
            Token::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_let_statement(&mut self) -> Option<ast::LetStatement> {
        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let name = ast::Identifier::from(self.cur_token.literal());

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ast::LetStatement { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ast::ReturnStatement> {
        self.next_token();

        let return_value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ast::ReturnStatement { return_value })
    }

    fn parse_expression_statement(&mut self) -> Option<ast::ExpressionStatement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ast::ExpressionStatement { expression })
    }

    fn parse_block_statement(&mut self) -> ast::BlockStatement {
        let mut block = ast::BlockStatement::default();
        self.next_token();

        while !self.cur_token.is(TokenType::RBrace) && !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.next_token();
        }

        block
    }

    fn skip_semicolon(&mut self) {
        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token.is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token.clone() {
            Token::Ident(name) => Some(Expression::Identifier(name.into())),
            Token::Int(literal) => self.parse_integer_literal(literal),
            Token::String(s) => Some(Expression::String(s)),
            Token::True => Some(Expression::Boolean(true.into())),
            Token::False => Some(Expression::Boolean(false.into())),
            Token::Bang | Token::Minus => self.parse_prefix_expression().map(Expression::Prefix),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression().map(Expression::If),
            Token::Function => self.parse_function_literal().map(Expression::Function),
            Token::LBracket => self
                .parse_expression_list(TokenType::RBracket)
                .map(|elements| Expression::Array(elements.into())),
            Token::LBrace => self.parse_hash_literal().map(Expression::Hash),
            token => {
                self.push_error(ParseError::NoPrefixParseFn {
                    token_type: token.token_type(),
                });
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.cur_token {
            Token::LParen => {
                let arguments = self.parse_expression_list(TokenType::RParen)?;
                Some(Expression::Call(ast::CallExpression {
                    function: Box::new(left),
                    arguments,
                }))
            }
            Token::LBracket => self.parse_index_expression(left).map(Expression::Index),
            _ => self.parse_infix_expression(left).map(Expression::Infix),
        }
    }

    fn parse_integer_literal(&mut self, literal: String) -> Option<Expression> {
        match literal.parse() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger { literal });
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<ast::PrefixExpression> {
        let operator = ast::Operator::from_token(&self.cur_token)?;
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(ast::PrefixExpression {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<ast::InfixExpression> {
        let operator = ast::Operator::from_token(&self.cur_token)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(ast::InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<ast::IfExpression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RParen) || !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.is(TokenType::Else) {
            self.next_token();
            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(ast::IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<ast::FunctionLiteral> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(ast::FunctionLiteral { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<ast::Identifier>> {
        let mut parameters = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }
        parameters.push(self.cur_token.literal().into());

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            if !self.expect_peek(TokenType::Ident) {
                return None;
            }
            parameters.push(self.cur_token.literal().into());
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Comma separated expressions up to `end`; the current token is the
    /// opening delimiter.
    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = vec![];

        if self.peek_token.is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<ast::IndexExpression> {
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }

        Some(ast::IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn parse_hash_literal(&mut self) -> Option<ast::HashLiteral> {
        let mut pairs = vec![];

        while !self.peek_token.is(TokenType::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenType::Colon) {
                return None;
            }
            self.next_token();

            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_token.is(TokenType::RBrace) && !self.expect_peek(TokenType::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenType::RBrace) {
            return None;
        }

        Some(pairs.into())
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek_token.token_type().into()
    }

    fn cur_precedence(&self) -> Precedence {
        self.cur_token.token_type().into()
    }

    fn expect_peek(&mut self, expected: TokenType) -> bool {
        if self.peek_token.is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenType) {
        self.push_error(ParseError::UnexpectedToken {
            expected,
            got: self.peek_token.token_type(),
        });
    }

    fn push_error(&mut self, error: ParseError) {
        debug!("parse error: {}", error);
        self.errors.push(error);
    }
}
