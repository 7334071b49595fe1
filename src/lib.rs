pub mod ast;
pub mod builtins;
mod environment;
pub mod evaluator;
mod lexer;
pub mod logger;
pub mod object;
mod parser;
pub mod repl;
pub mod token;

pub use environment::Environment;
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
