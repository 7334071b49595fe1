use strum_macros::{Display, EnumDiscriminants};

#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(TokenType))]
pub enum Token {
    Illegal(char),
    Eof,

    // Identifiers and literals
    Ident(String),
    Int(String),
    String(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Slash,
    Asterisk,
    Bang,
    LT,
    GT,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    Colon,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Else,
    False,
    Function,
    If,
    Let,
    Return,
    True,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        match text {
            "let" => Self::Let,
            "fn" => Self::Function,
            "if" => Self::If,
            "return" => Self::Return,
            "true" => Self::True,
            "else" => Self::Else,
            "false" => Self::False,
            identifier => Self::Ident(identifier.to_owned()),
        }
    }
}

impl Token {
    pub fn is(&self, token_type: TokenType) -> bool {
        TokenType::from(self) == token_type
    }

    pub fn token_type(&self) -> TokenType {
        TokenType::from(self)
    }

    /// The exact source text this token was read from.
    pub fn literal(&self) -> String {
        let text = match self {
            Self::Illegal(c) => return c.to_string(),
            Self::Ident(s) | Self::Int(s) | Self::String(s) => return s.clone(),
            Self::Eof => "",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Asterisk => "*",
            Self::Bang => "!",
            Self::LT => "<",
            Self::GT => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Else => "else",
            Self::False => "false",
            Self::Function => "fn",
            Self::If => "if",
            Self::Let => "let",
            Self::Return => "return",
            Self::True => "true",
        };
        text.to_owned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        let cases = vec![
            ("fn", Token::Function),
            ("let", Token::Let),
            ("if", Token::If),
            ("else", Token::Else),
            ("return", Token::Return),
            ("true", Token::True),
            ("false", Token::False),
            ("letter", Token::Ident("letter".to_owned())),
            ("_fn", Token::Ident("_fn".to_owned())),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(Token::from(input), expected);
        }
    }

    #[test]
    fn test_literal() {
        assert_eq!(Token::NotEq.literal(), "!=");
        assert_eq!(Token::Function.literal(), "fn");
        assert_eq!(Token::Int("42".to_owned()).literal(), "42");
        assert_eq!(Token::Illegal('@').literal(), "@");
        assert_eq!(Token::Eof.literal(), "");
        assert!(Token::LBracket.is(TokenType::LBracket));
        assert_eq!(TokenType::LParen.to_string(), "LParen");
    }
}
