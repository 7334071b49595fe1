use crate::token::Token;
use log::trace;

pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: u8,
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }
}

impl Lexer {
    pub fn new(input: String) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = *self.input.as_bytes().get(self.read_position).unwrap_or(&0);
        self.position = self.read_position.min(self.input.len());
        self.read_position = (self.read_position + 1).min(self.input.len() + 1);
    }

    fn peek_char(&self) -> u8 {
        *self.input.as_bytes().get(self.read_position).unwrap_or(&0)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            _ if self.at_end() => return Token::Eof,
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::Eq
                } else {
                    Token::Assign
                }
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Asterisk,
            b'/' => Token::Slash,
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::NotEq
                } else {
                    Token::Bang
                }
            }
            b'<' => Token::LT,
            b'>' => Token::GT,
            b';' => Token::Semicolon,
            b':' => Token::Colon,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b',' => Token::Comma,
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            b'"' => Token::String(self.read_string().to_owned()),
            c => {
                if is_letter(c) {
                    return Token::from(self.read_identifier());
                } else if c.is_ascii_digit() {
                    return Token::Int(self.read_number().to_owned());
                } else {
                    return self.read_illegal();
                }
            }
        };
        self.read_char();
        trace!("lexed {:?}", token);
        token
    }

    fn read_identifier(&mut self) -> &str {
        let start = self.position;
        while !self.at_end() && is_letter(self.ch) {
            self.read_char()
        }
        &self.input[start..self.position]
    }

    fn read_number(&mut self) -> &str {
        let start = self.position;
        while !self.at_end() && self.ch.is_ascii_digit() {
            self.read_char()
        }
        &self.input[start..self.position]
    }

    // Leaves the closing quote as the current character; an unterminated
    // string runs to end of input.
    fn read_string(&mut self) -> &str {
        let start = self.position + 1;
        loop {
            self.read_char();
            if self.at_end() || self.ch == b'"' {
                break;
            }
        }
        &self.input[start..self.position]
    }

    fn read_illegal(&mut self) -> Token {
        let c = self.input[self.position..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        for _ in 0..c.len_utf8() {
            self.read_char();
        }
        Token::Illegal(c)
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}
