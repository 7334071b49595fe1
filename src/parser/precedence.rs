use crate::token::TokenType;

/// Binding power, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl From<TokenType> for Precedence {
    fn from(token_type: TokenType) -> Self {
        match token_type {
            TokenType::Eq | TokenType::NotEq => Self::Equals,
            TokenType::LT | TokenType::GT => Self::LessGreater,
            TokenType::Plus | TokenType::Minus => Self::Sum,
            TokenType::Asterisk | TokenType::Slash => Self::Product,
            TokenType::LParen => Self::Call,
            TokenType::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Precedence::from(TokenType::Asterisk) > Precedence::from(TokenType::Plus));
        assert!(Precedence::from(TokenType::Plus) > Precedence::from(TokenType::LT));
        assert!(Precedence::from(TokenType::LT) > Precedence::from(TokenType::Eq));
        assert!(Precedence::from(TokenType::LBracket) > Precedence::from(TokenType::LParen));
        assert!(Precedence::Prefix > Precedence::Product);
        assert_eq!(Precedence::from(TokenType::Semicolon), Precedence::Lowest);
        assert_eq!(Precedence::from(TokenType::Colon), Precedence::Lowest);
    }
}
